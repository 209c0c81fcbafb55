use crossterm::event::KeyEvent;
use tracing::debug;
use tui_input::Input;

use crate::config::Config;
use crate::document::{DisplayUnit, Document, DocumentKind, DocxMode};
use crate::error::{AppError, AppResult};
use crate::input::{KeymapPreset, PromptKey, map_key_to_action_with_preset, map_prompt_key};

use super::action::{LoopControl, PagerAction};
use super::nav;
use super::search::{cycle, find_matches};
use super::state::{PagerMode, SearchState, ViewerState};

/// One interactive session over a loaded document.
pub struct Pager {
    name: String,
    document: Document,
    state: ViewerState,
    keymap: KeymapPreset,
}

impl Pager {
    pub fn new(name: impl Into<String>, document: Document, config: &Config) -> Self {
        let viewport_size = match document.kind() {
            DocumentKind::Csv => config.pager.csv_rows_per_page,
            _ => config.pager.viewport_size,
        };
        let state = ViewerState::new(viewport_size, document.initial_mode());
        Self {
            name: name.into(),
            document,
            state,
            keymap: KeymapPreset::parse(&config.keymap.preset),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn keymap(&self) -> KeymapPreset {
        self.keymap
    }

    /// Applies one key press. The state only changes when the transition succeeds.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppResult<LoopControl> {
        let mut next = self.state.clone();
        let control = self.on_key(&mut next, key)?;
        self.state = next;
        Ok(control)
    }

    /// Applies one browsing action regardless of the current mode.
    pub fn apply(&mut self, action: PagerAction) -> AppResult<LoopControl> {
        let mut next = self.state.clone();
        let control = self.browse(&mut next, action)?;
        self.state = next;
        Ok(control)
    }

    fn on_key(&self, state: &mut ViewerState, key: KeyEvent) -> AppResult<LoopControl> {
        match state.mode {
            PagerMode::Browsing => match map_key_to_action_with_preset(key, self.keymap) {
                Some(action) => self.browse(state, action),
                None => Ok(LoopControl::Continue),
            },
            PagerMode::SearchInput => {
                self.on_prompt_key(state, key);
                Ok(LoopControl::Continue)
            }
            PagerMode::Help => {
                state.mode = PagerMode::Browsing;
                state.status.set("help", "");
                Ok(LoopControl::Continue)
            }
            PagerMode::Terminal => Ok(LoopControl::Break),
        }
    }

    fn browse(&self, state: &mut ViewerState, action: PagerAction) -> AppResult<LoopControl> {
        debug!(action = action.id(), cursor = state.cursor, "pager action");
        let len = self.document.len(state.docx_mode);
        let id = action.id();

        match action {
            PagerAction::Up => {
                ensure_units(len, action)?;
                state.move_cursor(nav::line_up(state.cursor));
            }
            PagerAction::Down => {
                ensure_units(len, action)?;
                state.move_cursor(nav::line_down(state.cursor, len));
            }
            PagerAction::PageUp => {
                ensure_units(len, action)?;
                state.move_cursor(nav::page_up(state.cursor, state.viewport_size));
            }
            PagerAction::PageDown => {
                ensure_units(len, action)?;
                state.move_cursor(nav::page_down(state.cursor, state.viewport_size, len));
            }
            PagerAction::Home => {
                ensure_units(len, action)?;
                state.move_cursor(0);
            }
            PagerAction::End => {
                ensure_units(len, action)?;
                state.move_cursor(nav::last_index(len));
            }
            PagerAction::ToggleHighlight => {
                ensure_units(len, action)?;
                if self.document.kind() != DocumentKind::Text {
                    state
                        .status
                        .set(id, "highlighting is only available for text files");
                } else if state.highlighted.remove(&state.cursor) {
                    state
                        .status
                        .set(id, format!("line {} unhighlighted", state.cursor + 1));
                } else {
                    state.highlighted.insert(state.cursor);
                    state
                        .status
                        .set(id, format!("line {} highlighted", state.cursor + 1));
                }
            }
            PagerAction::Search => {
                state.search_input = Input::default();
                state.mode = PagerMode::SearchInput;
                state.status.set(id, "");
            }
            PagerAction::NextResult => self.step_result(state, true, id),
            PagerAction::PrevResult => self.step_result(state, false, id),
            PagerAction::ToggleMode => self.toggle_mode(state, id),
            PagerAction::Advance => {
                ensure_units(len, action)?;
                self.advance(state, len, id);
            }
            PagerAction::Help => {
                state.mode = PagerMode::Help;
                state.status.set(id, "");
            }
            PagerAction::Quit => {
                state.mode = PagerMode::Terminal;
                state.status.set(id, "");
                return Ok(LoopControl::Break);
            }
        }

        Ok(LoopControl::Continue)
    }

    fn on_prompt_key(&self, state: &mut ViewerState, key: KeyEvent) {
        match map_prompt_key(key) {
            Some(PromptKey::Submit) => {
                let term = state.search_input.value().to_string();
                state.search_input.reset();
                state.mode = PagerMode::Browsing;
                self.submit_search(state, term);
            }
            Some(PromptKey::Cancel) => {
                state.search_input.reset();
                state.mode = PagerMode::Browsing;
                state.status.set("search", "search cancelled");
            }
            Some(PromptKey::Recall) => {
                if let Some(term) = &state.search.term {
                    state.search_input = Input::default().with_value(term.clone());
                }
            }
            Some(PromptKey::Edit(request)) => {
                state.search_input.handle(request);
            }
            None => {}
        }
    }

    fn submit_search(&self, state: &mut ViewerState, term: String) {
        if term.is_empty() {
            state.search = SearchState::default();
            state.status.set("search", "search cleared");
            return;
        }

        let results = find_matches(&self.document, &term);
        debug!(term = %term, hits = results.len(), "search");
        let message = match results.len() {
            0 => format!("no results for '{term}'"),
            1 => format!("1 result for '{term}'"),
            n => format!("{n} results for '{term}'"),
        };
        state.search = SearchState {
            term: Some(term),
            results,
            cursor: 0,
        };
        if let Some(hit) = state.search.current() {
            state.docx_mode = hit.mode;
            state.move_cursor(hit.index);
        }
        state.status.set("search", message);
    }

    fn step_result(&self, state: &mut ViewerState, forward: bool, id: &'static str) {
        let Some(term) = state.search.term.as_deref() else {
            state.status.set(id, "no active search");
            return;
        };
        let total = state.search.results.len();
        if total == 0 {
            let message = format!("no results for '{term}'");
            state.status.set(id, message);
            return;
        }

        state.search.cursor = cycle(state.search.cursor, total, forward);
        if let Some(hit) = state.search.current() {
            if hit.mode != state.docx_mode {
                state.docx_mode = hit.mode;
                state.page_scroll = 0;
            }
            state.move_cursor(hit.index);
        }
        let message = format!("result {}/{}", state.search.cursor + 1, total);
        state.status.set(id, message);
    }

    fn toggle_mode(&self, state: &mut ViewerState, id: &'static str) {
        if self.document.kind() != DocumentKind::Docx {
            state
                .status
                .set(id, "paragraph/table mode only applies to docx files");
            return;
        }

        let target = state.docx_mode.toggled();
        if self.document.len(target) == 0 {
            state
                .status
                .set(id, format!("this document has no {}", target.label()));
            return;
        }

        state.docx_mode = target;
        state.cursor = 0;
        state.page_scroll = 0;
        state
            .status
            .set(id, format!("showing {}", target.label()));
    }

    fn advance(&self, state: &mut ViewerState, len: usize, id: &'static str) {
        if self.document.kind() == DocumentKind::Pdf {
            let lines = self.page_line_count(state.cursor);
            if let Some(next) = nav::next_chunk(state.page_scroll, state.viewport_size, lines) {
                state.page_scroll = next;
                return;
            }
        }

        if state.cursor >= nav::last_index(len) {
            state.status.set(id, "end of document");
            return;
        }
        state.move_cursor(nav::line_down(state.cursor, len));
    }

    pub(crate) fn page_line_count(&self, index: usize) -> usize {
        match self.document.units(DocxMode::Paragraphs).get(index) {
            Some(DisplayUnit::PdfPage { text: Some(text) }) => text.lines().count(),
            _ => 0,
        }
    }
}

fn ensure_units(len: usize, action: PagerAction) -> AppResult<()> {
    if len == 0 {
        return Err(AppError::unsupported(format!(
            "{} has nothing to move over in an empty section",
            action.id()
        )));
    }
    Ok(())
}
