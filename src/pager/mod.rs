mod action;
mod core;
mod event_loop;
mod frame;
mod nav;
mod renderer;
mod search;
mod state;
mod terminal_session;

#[cfg(test)]
mod tests;

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::document::{ContentLoader, ContentType};
use crate::error::{AppError, AppResult};
use crate::input::KeySource;
use crate::report::ErrorReporter;

pub use action::{LoopControl, PagerAction};
pub use core::Pager;
pub use frame::{FrameRow, FrameView, Overlay, RowStyle};
pub use nav::viewport_window;
pub use renderer::{Renderer, TerminalRenderer};
pub use search::find_matches;
pub use state::{PagerMode, SearchHit, SearchState, StatusState, ViewerState};

/// Collaborators a pager session talks to.
pub struct PagerIo<'a> {
    pub loader: &'a dyn ContentLoader,
    pub keys: &'a mut dyn KeySource,
    pub renderer: &'a mut dyn Renderer,
    pub reporter: &'a mut dyn ErrorReporter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user quit a session that was shown.
    Closed,
    /// Loading failed; nothing was drawn.
    NotOpened { diagnostic: String },
}

/// Loads `path` and runs an interactive session over it, blocking until quit.
///
/// Load failures are reported once and returned as
/// [`SessionOutcome::NotOpened`] without touching the renderer.
pub fn open_pager(
    io: PagerIo<'_>,
    config: &Config,
    path: &Path,
    filename: &str,
    content_type: ContentType,
) -> AppResult<SessionOutcome> {
    let PagerIo {
        loader,
        keys,
        renderer,
        reporter,
    } = io;

    let document = match loader.load(path, content_type) {
        Ok(document) => document,
        Err(err) => {
            let err = AppError::from(err);
            reporter.report(&err);
            return Ok(SessionOutcome::NotOpened {
                diagnostic: err.to_string(),
            });
        }
    };

    info!(
        file = filename,
        kind = document.kind().label(),
        units = document.len(document.initial_mode()),
        "opening pager"
    );
    let mut pager = Pager::new(filename, document, config);

    renderer.begin()?;
    let result = pager.run(keys, renderer, reporter);
    let ended = renderer.end();
    result?;
    ended?;

    info!(file = filename, "pager closed");
    Ok(SessionOutcome::Closed)
}
