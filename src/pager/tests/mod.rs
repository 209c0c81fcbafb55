mod properties;

use std::collections::VecDeque;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::document::{ContentLoader, ContentType, Document};
use crate::error::{AppError, AppResult, LoadError};
use crate::input::KeySource;
use crate::report::ErrorReporter;

use super::{FrameView, Pager, Renderer};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn numbered_lines(count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("line {n}")).collect()
}

fn config_with_viewport(viewport_size: usize) -> Config {
    let mut config = Config::default();
    config.pager.viewport_size = viewport_size;
    config
}

fn text_pager(lines: usize, viewport_size: usize) -> Pager {
    Pager::new(
        "notes.txt",
        Document::text(numbered_lines(lines)),
        &config_with_viewport(viewport_size),
    )
}

fn press(pager: &mut Pager, key: KeyEvent) {
    pager
        .handle_key(key)
        .expect("transition should succeed");
}

/// Opens the prompt, types `term` and submits it.
fn search(pager: &mut Pager, term: &str) {
    press(pager, ch('/'));
    for c in term.chars() {
        press(pager, ch(c));
    }
    press(pager, key(KeyCode::Enter));
}

/// Replays a fixed key script; `None` entries stand for non-key events.
struct ScriptedKeys {
    script: VecDeque<Option<KeyEvent>>,
}

impl ScriptedKeys {
    fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            script: keys.into_iter().map(Some).collect(),
        }
    }

    fn from_events(events: impl IntoIterator<Item = Option<KeyEvent>>) -> Self {
        Self {
            script: events.into_iter().collect(),
        }
    }

    fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> AppResult<Option<KeyEvent>> {
        self.script
            .pop_front()
            .ok_or_else(|| AppError::invalid_argument("key script exhausted"))
    }
}

#[derive(Default)]
struct RecordingRenderer {
    began: usize,
    ended: usize,
    frames: Vec<FrameView>,
    /// Number of upcoming `render` calls that fail before any succeeds.
    failing_renders: usize,
}

impl Renderer for RecordingRenderer {
    fn begin(&mut self) -> AppResult<()> {
        self.began += 1;
        Ok(())
    }

    fn render(&mut self, view: &FrameView) -> AppResult<()> {
        if self.failing_renders > 0 {
            self.failing_renders -= 1;
            return Err(AppError::io_with_context(
                std::io::Error::other("backend gone"),
                "failed to draw frame",
            ));
        }
        self.frames.push(view.clone());
        Ok(())
    }

    fn end(&mut self) -> AppResult<()> {
        self.ended += 1;
        Ok(())
    }
}

#[derive(Default)]
struct RecordingReporter {
    errors: Vec<String>,
}

impl ErrorReporter for RecordingReporter {
    fn report(&mut self, err: &AppError) {
        self.errors.push(err.to_string());
    }
}

/// Hands out a prepared document regardless of path.
struct StaticLoader {
    document: Document,
}

impl ContentLoader for StaticLoader {
    fn load(&self, _path: &Path, _content_type: ContentType) -> Result<Document, LoadError> {
        Ok(self.document.clone())
    }
}
