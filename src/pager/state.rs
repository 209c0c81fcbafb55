use std::collections::BTreeSet;

use tui_input::Input;

use crate::document::DocxMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerMode {
    Browsing,
    SearchInput,
    Help,
    Terminal,
}

impl PagerMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Browsing => "BROWSE",
            Self::SearchInput => "SEARCH",
            Self::Help => "HELP",
            Self::Terminal => "DONE",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusState {
    pub message: String,
    pub last_action: Option<&'static str>,
}

impl StatusState {
    pub(crate) fn set(&mut self, action: &'static str, message: impl Into<String>) {
        self.last_action = Some(action);
        self.message = message.into();
    }
}

/// Location of one search match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchHit {
    pub mode: DocxMode,
    pub index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub term: Option<String>,
    pub results: Vec<SearchHit>,
    /// Index into `results`.
    pub cursor: usize,
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        self.term.is_some()
    }

    pub fn current(&self) -> Option<SearchHit> {
        self.results.get(self.cursor).copied()
    }
}

/// Everything a pager session mutates. Cloned before each event so a failing
/// handler can be discarded without partial updates.
#[derive(Debug, Clone)]
pub struct ViewerState {
    pub cursor: usize,
    pub viewport_size: usize,
    pub highlighted: BTreeSet<usize>,
    pub search: SearchState,
    pub docx_mode: DocxMode,
    /// First visible line inside the current PDF page.
    pub page_scroll: usize,
    pub mode: PagerMode,
    pub status: StatusState,
    pub search_input: Input,
}

impl ViewerState {
    pub fn new(viewport_size: usize, docx_mode: DocxMode) -> Self {
        Self {
            cursor: 0,
            viewport_size: viewport_size.max(1),
            highlighted: BTreeSet::new(),
            search: SearchState::default(),
            docx_mode,
            page_scroll: 0,
            mode: PagerMode::Browsing,
            status: StatusState::default(),
            search_input: Input::default(),
        }
    }

    /// Moves the cursor, resetting the in-page scroll when it changes.
    pub(crate) fn move_cursor(&mut self, target: usize) {
        if target != self.cursor {
            self.cursor = target;
            self.page_scroll = 0;
        }
    }
}
