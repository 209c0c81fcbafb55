use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::InputRequest;

use crate::document::DocumentKind;
use crate::pager::PagerAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

/// What a key means while the search prompt is open.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptKey {
    Submit,
    Cancel,
    /// Refill the prompt with the previous term.
    Recall,
    Edit(InputRequest),
}

pub fn map_key_to_action(key: KeyEvent) -> Option<PagerAction> {
    map_key_to_action_with_preset(key, KeymapPreset::Default)
}

pub fn map_key_to_action_with_preset(key: KeyEvent, preset: KeymapPreset) -> Option<PagerAction> {
    match preset {
        KeymapPreset::Default => map_browse_key_default(key),
        KeymapPreset::Emacs => map_browse_key_emacs(key),
    }
}

fn map_browse_key_default(key: KeyEvent) -> Option<PagerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(PagerAction::Quit),
            KeyCode::Char('f') => Some(PagerAction::PageDown),
            KeyCode::Char('b') => Some(PagerAction::PageUp),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(PagerAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(PagerAction::Down),
        KeyCode::PageUp | KeyCode::Char('b') => Some(PagerAction::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') | KeyCode::Char('f') => Some(PagerAction::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(PagerAction::Home),
        KeyCode::End | KeyCode::Char('G') => Some(PagerAction::End),
        KeyCode::Char('h') => Some(PagerAction::ToggleHighlight),
        KeyCode::Char('/') => Some(PagerAction::Search),
        KeyCode::Char('n') => Some(PagerAction::NextResult),
        KeyCode::Char('N') => Some(PagerAction::PrevResult),
        KeyCode::Tab | KeyCode::Char('t') => Some(PagerAction::ToggleMode),
        KeyCode::Enter => Some(PagerAction::Advance),
        KeyCode::Char('?') => Some(PagerAction::Help),
        KeyCode::Char('q') | KeyCode::Esc => Some(PagerAction::Quit),
        _ => None,
    }
}

fn map_browse_key_emacs(key: KeyEvent) -> Option<PagerAction> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('v') => Some(PagerAction::PageUp),
            KeyCode::Char('<') => Some(PagerAction::Home),
            KeyCode::Char('>') => Some(PagerAction::End),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(PagerAction::Down),
            KeyCode::Char('p') => Some(PagerAction::Up),
            KeyCode::Char('v') => Some(PagerAction::PageDown),
            KeyCode::Char('s') => Some(PagerAction::Search),
            KeyCode::Char('r') => Some(PagerAction::PrevResult),
            KeyCode::Char(' ') => Some(PagerAction::ToggleHighlight),
            KeyCode::Char('g') | KeyCode::Char('c') => Some(PagerAction::Quit),
            _ => None,
        };
    }

    map_browse_key_default(key)
}

pub fn map_prompt_key(key: KeyEvent) -> Option<PromptKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') => Some(PromptKey::Edit(InputRequest::DeleteLine)),
            KeyCode::Char('w') => Some(PromptKey::Edit(InputRequest::DeletePrevWord)),
            KeyCode::Char('a') => Some(PromptKey::Edit(InputRequest::GoToStart)),
            KeyCode::Char('e') => Some(PromptKey::Edit(InputRequest::GoToEnd)),
            KeyCode::Char('c') | KeyCode::Char('g') => Some(PromptKey::Cancel),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(PromptKey::Submit),
        KeyCode::Esc => Some(PromptKey::Cancel),
        KeyCode::Up => Some(PromptKey::Recall),
        KeyCode::Backspace => Some(PromptKey::Edit(InputRequest::DeletePrevChar)),
        KeyCode::Delete => Some(PromptKey::Edit(InputRequest::DeleteNextChar)),
        KeyCode::Left => Some(PromptKey::Edit(InputRequest::GoToPrevChar)),
        KeyCode::Right => Some(PromptKey::Edit(InputRequest::GoToNextChar)),
        KeyCode::Home => Some(PromptKey::Edit(InputRequest::GoToStart)),
        KeyCode::End => Some(PromptKey::Edit(InputRequest::GoToEnd)),
        KeyCode::Char(ch) => Some(PromptKey::Edit(InputRequest::InsertChar(ch))),
        _ => None,
    }
}

/// One-line key reminder shown under the header.
pub fn hint_line(preset: KeymapPreset, kind: DocumentKind) -> String {
    let mut hint = match preset {
        KeymapPreset::Default => "j/k move  b/f page  g/G ends  / search  n/N results".to_string(),
        KeymapPreset::Emacs => "C-n/C-p move  C-v/M-v page  C-s search  n/N results".to_string(),
    };
    match kind {
        DocumentKind::Text => hint.push_str(match preset {
            KeymapPreset::Default => "  h highlight",
            KeymapPreset::Emacs => "  C-SPC highlight",
        }),
        DocumentKind::Docx => hint.push_str("  Tab paragraphs/tables"),
        DocumentKind::Pdf => hint.push_str("  Enter more of page"),
        DocumentKind::Csv => {}
    }
    hint.push_str("  ? help  q quit");
    hint
}

pub fn help_lines(preset: KeymapPreset) -> Vec<String> {
    let rows: &[(&str, &str)] = match preset {
        KeymapPreset::Default => &[
            ("Up / k", "previous line"),
            ("Down / j", "next line"),
            ("PgUp / b", "previous page"),
            ("PgDn / f / Space", "next page"),
            ("Home / g", "first line"),
            ("End / G", "last line"),
            ("h", "toggle highlight (text files)"),
            ("/", "search (Up recalls the last term)"),
            ("n / N", "next / previous result"),
            ("Tab / t", "switch paragraphs and tables (docx)"),
            ("Enter", "next part of a long page (pdf)"),
            ("?", "this help"),
            ("q / Esc", "close the viewer"),
        ],
        KeymapPreset::Emacs => &[
            ("C-p / C-n", "previous / next line"),
            ("M-v / C-v", "previous / next page"),
            ("M-< / M->", "first / last line"),
            ("C-SPC", "toggle highlight (text files)"),
            ("C-s", "search (Up recalls the last term)"),
            ("n / C-r", "next / previous result"),
            ("Tab", "switch paragraphs and tables (docx)"),
            ("Enter", "next part of a long page (pdf)"),
            ("?", "this help"),
            ("C-g / q", "close the viewer"),
        ],
    };

    let key_width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(key, what)| format!("{key:<key_width$}  {what}"))
        .collect()
}
