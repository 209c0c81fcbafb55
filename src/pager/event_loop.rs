use tracing::warn;

use crate::error::AppResult;
use crate::input::KeySource;
use crate::report::ErrorReporter;

use super::action::LoopControl;
use super::core::Pager;
use super::renderer::Renderer;

impl Pager {
    /// Draws, waits for a key, applies it; until quit.
    ///
    /// Failing transitions and failed draws are reported and otherwise
    /// ignored; the next iteration redraws from unchanged state. Only a key
    /// source failure ends the session.
    pub fn run(
        &mut self,
        keys: &mut dyn KeySource,
        renderer: &mut dyn Renderer,
        reporter: &mut dyn ErrorReporter,
    ) -> AppResult<()> {
        loop {
            if let Err(err) = renderer.render(&self.frame_view()) {
                warn!("frame render failed; redrawing on next key");
                reporter.report(&err);
            }

            let Some(key) = keys.read_key()? else {
                continue;
            };

            match self.handle_key(key) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Break) => break,
                Err(err) => {
                    warn!(code = ?key.code, "key handler failed; state unchanged");
                    reporter.report(&err);
                }
            }
        }

        Ok(())
    }
}
