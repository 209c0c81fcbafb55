use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::error::{AppError, AppResult};

/// Blocking source of key presses.
pub trait KeySource {
    /// Waits for the next event. `Ok(None)` means something other than a key
    /// press arrived (resize, key release) and the caller should redraw and ask
    /// again.
    fn read_key(&mut self) -> AppResult<Option<KeyEvent>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermKeySource;

impl KeySource for CrosstermKeySource {
    fn read_key(&mut self) -> AppResult<Option<KeyEvent>> {
        let event =
            event::read().map_err(|err| AppError::io_with_context(err, "failed to read key"))?;
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                Ok(Some(key))
            }
            _ => Ok(None),
        }
    }
}
