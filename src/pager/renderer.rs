use crate::error::{AppError, AppResult};
use crate::ui::draw_frame;

use super::frame::FrameView;
use super::terminal_session::{TerminalSession, TerminalSurface};

/// Output side of a pager session.
///
/// `begin` is only called once a document has loaded, and `end` always
/// follows a successful `begin`.
pub trait Renderer {
    fn begin(&mut self) -> AppResult<()> {
        Ok(())
    }

    fn render(&mut self, view: &FrameView) -> AppResult<()>;

    fn end(&mut self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct TerminalRenderer {
    session: Option<TerminalSession>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for TerminalRenderer {
    fn begin(&mut self) -> AppResult<()> {
        if self.session.is_none() {
            self.session = Some(TerminalSession::enter()?);
        }
        Ok(())
    }

    fn render(&mut self, view: &FrameView) -> AppResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Err(AppError::invalid_argument(
                "render called outside a terminal session",
            ));
        };
        draw_view(session, view)
    }

    fn end(&mut self) -> AppResult<()> {
        if let Some(mut session) = self.session.take() {
            session
                .restore()
                .map_err(|err| AppError::io_with_context(err, "failed to restore terminal"))?;
        }
        Ok(())
    }
}

pub(crate) fn draw_view<S: TerminalSurface>(surface: &mut S, view: &FrameView) -> AppResult<()> {
    surface
        .draw(|frame| {
            let area = frame.area();
            draw_frame(frame, area, view);
        })
        .map_err(|err| AppError::io_with_context(err, "failed to draw frame"))
}
