/// Normalized browsing events produced by the keymap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    ToggleHighlight,
    Search,
    NextResult,
    PrevResult,
    ToggleMode,
    /// Enter: next chunk of a long PDF page, otherwise one unit down.
    Advance,
    Help,
    Quit,
}

impl PagerAction {
    pub fn id(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::PageUp => "page-up",
            Self::PageDown => "page-down",
            Self::Home => "home",
            Self::End => "end",
            Self::ToggleHighlight => "toggle-highlight",
            Self::Search => "search",
            Self::NextResult => "next-result",
            Self::PrevResult => "prev-result",
            Self::ToggleMode => "toggle-mode",
            Self::Advance => "advance",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Break,
}
