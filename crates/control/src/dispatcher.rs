//! The action dispatch policy.
//!
//! Given the arbitrated gesture signal for a frame, decides which effect
//! to request from the backend and when to reset continuity state. Swipes
//! fully preempt static-gesture handling for their frame; discrete actions
//! (click, lock, volume, tab switch) all pass through the one shared
//! cooldown gate; pointer movement and scrolling are continuous and
//! ungated.

use airctl_common::config::ControlConfig;
use airctl_gesture_core::cooldown::CooldownGate;
use airctl_hand_model::labels::{GestureSignal, MotionLabel, PoseLabel};
use airctl_hand_model::landmark::HandObservation;

use crate::{ControlBackend, TabDirection};

/// Configuration for the dispatcher.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Minimum fingertip delta before a scroll is emitted (normalized).
    pub scroll_noise_threshold: f64,

    /// Multiplier from normalized fingertip delta to scroll amount.
    pub scroll_sensitivity: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            scroll_noise_threshold: 0.01,
            scroll_sensitivity: 30.0,
        }
    }
}

impl From<&ControlConfig> for DispatchConfig {
    fn from(config: &ControlConfig) -> Self {
        Self {
            scroll_noise_threshold: config.scroll_noise_threshold,
            scroll_sensitivity: config.scroll_sensitivity,
        }
    }
}

/// Maps gesture signals to backend effects, owning per-gesture continuity
/// state (the scroll anchor).
#[derive(Debug)]
pub struct ActionDispatcher {
    config: DispatchConfig,

    /// Fingertip y of the previous TwoFingers frame. Present only while
    /// the scroll gesture is continuous; any other gesture clears it so a
    /// resumed scroll starts from a fresh anchor instead of a stale one.
    scroll_anchor_y: Option<f64>,
}

impl ActionDispatcher {
    /// Create a dispatcher with the given configuration.
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config,
            scroll_anchor_y: None,
        }
    }

    /// Create a dispatcher with default settings.
    pub fn with_defaults() -> Self {
        Self::new(DispatchConfig::default())
    }

    /// Dispatch one frame. Backend failures are logged and swallowed; the
    /// only no-op path is an absent observation with no swipe.
    pub fn dispatch(
        &mut self,
        signal: GestureSignal,
        observation: Option<&HandObservation>,
        gate: &mut CooldownGate,
        now_ms: u64,
        backend: &mut dyn ControlBackend,
    ) {
        // Swipes preempt all static-gesture handling for this frame.
        let pose = match signal {
            GestureSignal::Motion(motion) => {
                if !gate.is_active(now_ms) {
                    let direction = match motion {
                        MotionLabel::SwipeLeft => TabDirection::Left,
                        MotionLabel::SwipeRight => TabDirection::Right,
                    };
                    tracing::info!(%direction, "Tab switch");
                    log_failure(backend.switch_tab(direction), backend.name());
                    gate.trigger(now_ms);
                }
                return;
            }
            GestureSignal::Pose(pose) => pose,
        };

        let Some(hand) = observation else {
            return;
        };

        match pose {
            PoseLabel::IndexFinger => {
                let tip = hand.index_tip();
                log_failure(backend.move_pointer(tip.x, tip.y), backend.name());
                self.scroll_anchor_y = None;
            }

            PoseLabel::TwoFingers => {
                let tip_y = hand.index_tip().y;
                if let Some(prev_y) = self.scroll_anchor_y {
                    // Upward fingertip motion (y shrinking) scrolls up.
                    let dy = prev_y - tip_y;
                    if dy.abs() > self.config.scroll_noise_threshold {
                        let amount = dy * self.config.scroll_sensitivity;
                        log_failure(backend.scroll(amount), backend.name());
                    }
                }
                self.scroll_anchor_y = Some(tip_y);
            }

            PoseLabel::Pinch => {
                if !gate.is_active(now_ms) {
                    tracing::info!("Click");
                    log_failure(backend.click(), backend.name());
                    gate.trigger(now_ms);
                }
                // Pointer follows the pinch on every frame regardless of
                // the gate, giving drag-like movement while pinched.
                let tip = hand.index_tip();
                log_failure(backend.move_pointer(tip.x, tip.y), backend.name());
            }

            PoseLabel::Fist => {
                self.scroll_anchor_y = None;
                if !gate.is_active(now_ms) {
                    tracing::info!("Screen lock");
                    log_failure(backend.lock_screen(), backend.name());
                    gate.trigger(now_ms);
                }
            }

            PoseLabel::ThumbsUp => {
                self.scroll_anchor_y = None;
                if !gate.is_active(now_ms) {
                    tracing::info!("Volume up");
                    log_failure(backend.volume_up(), backend.name());
                    gate.trigger(now_ms);
                }
            }

            PoseLabel::ThumbsDown => {
                self.scroll_anchor_y = None;
                if !gate.is_active(now_ms) {
                    tracing::info!("Volume down");
                    log_failure(backend.volume_down(), backend.name());
                    gate.trigger(now_ms);
                }
            }

            PoseLabel::Idle | PoseLabel::OpenPalm => {
                self.scroll_anchor_y = None;
            }
        }
    }

    /// Current scroll anchor, if the scroll gesture is continuous.
    pub fn scroll_anchor_y(&self) -> Option<f64> {
        self.scroll_anchor_y
    }
}

fn log_failure(result: airctl_common::error::AirctlResult<()>, backend: &str) {
    if let Err(e) = result {
        tracing::warn!(backend, error = %e, "Effect injection failed");
    }
}
