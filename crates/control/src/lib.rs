//! Airctl Control
//!
//! Translates arbitrated gesture signals into OS effects. Uses a pluggable
//! backend architecture so the same dispatch policy drives different
//! injection mechanisms:
//!
//! - **Uinput:** a virtual input device (Linux, requires /dev/uinput access)
//! - **Null:** log-only, for replays and dry runs
//!
//! All effects are fire-and-forget: a backend either injects the event or
//! reports an error that the dispatcher logs and swallows. The dispatcher
//! itself never fails.

pub mod backends;
pub mod dispatcher;

use airctl_common::error::AirctlResult;
use serde::{Deserialize, Serialize};

pub use dispatcher::ActionDispatcher;

/// Direction for tab switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabDirection {
    Left,
    Right,
}

impl std::fmt::Display for TabDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabDirection::Left => f.write_str("left"),
            TabDirection::Right => f.write_str("right"),
        }
    }
}

/// Trait for OS effect backends.
pub trait ControlBackend: Send {
    /// Move the pointer toward a normalized `[0, 1]` screen position.
    fn move_pointer(&mut self, x: f64, y: f64) -> AirctlResult<()>;

    /// Press and release the primary mouse button.
    fn click(&mut self) -> AirctlResult<()>;

    /// Scroll vertically; positive amounts scroll up.
    fn scroll(&mut self, amount: f64) -> AirctlResult<()>;

    fn volume_up(&mut self) -> AirctlResult<()>;

    fn volume_down(&mut self) -> AirctlResult<()>;

    fn lock_screen(&mut self) -> AirctlResult<()>;

    fn switch_tab(&mut self, direction: TabDirection) -> AirctlResult<()>;

    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Check if the backend is available on this system.
    fn is_available(&self) -> bool;
}
