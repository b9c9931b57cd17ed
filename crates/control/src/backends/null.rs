//! Log-only backend for replays and dry runs.

use airctl_common::error::AirctlResult;

use crate::{ControlBackend, TabDirection};

/// A backend that logs every requested effect and injects nothing.
#[derive(Debug, Default)]
pub struct NullBackend {
    effects_requested: u64,
}

impl NullBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of effects requested so far.
    pub fn effects_requested(&self) -> u64 {
        self.effects_requested
    }

    fn log(&mut self, effect: &str) {
        self.effects_requested += 1;
        tracing::debug!(effect, "Effect (dry run)");
    }
}

impl ControlBackend for NullBackend {
    fn move_pointer(&mut self, x: f64, y: f64) -> AirctlResult<()> {
        self.effects_requested += 1;
        tracing::trace!(x, y, "Pointer move (dry run)");
        Ok(())
    }

    fn click(&mut self) -> AirctlResult<()> {
        self.log("click");
        Ok(())
    }

    fn scroll(&mut self, amount: f64) -> AirctlResult<()> {
        self.effects_requested += 1;
        tracing::trace!(amount, "Scroll (dry run)");
        Ok(())
    }

    fn volume_up(&mut self) -> AirctlResult<()> {
        self.log("volume_up");
        Ok(())
    }

    fn volume_down(&mut self) -> AirctlResult<()> {
        self.log("volume_down");
        Ok(())
    }

    fn lock_screen(&mut self) -> AirctlResult<()> {
        self.log("lock_screen");
        Ok(())
    }

    fn switch_tab(&mut self, direction: TabDirection) -> AirctlResult<()> {
        self.effects_requested += 1;
        tracing::debug!(%direction, "Tab switch (dry run)");
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }

    fn is_available(&self) -> bool {
        true
    }
}
