//! Airctl Gesture Core
//!
//! Turns per-frame hand observations into a stable gesture signal:
//! - **Classifier:** geometric static-pose classification of one frame
//! - **Confirmation:** N-consecutive-frame hysteresis over raw labels
//! - **Swipe:** velocity-based dynamic swipe detection over a wrist trajectory
//! - **Cooldown:** shared minimum-interval gate for discrete actions
//! - **Session:** the per-frame pipeline combining all of the above
//!
//! This crate is pure computation with no I/O and no platform dependencies.
//! All inputs are data; all outputs are data. Time enters only through
//! explicit `now` parameters, so sessions are deterministic under test.

pub mod classifier;
pub mod confirm;
pub mod cooldown;
pub mod session;
pub mod swipe;

pub use classifier::PoseClassifier;
pub use confirm::ConfirmationFilter;
pub use cooldown::CooldownGate;
pub use session::GestureSession;
pub use swipe::SwipeDetector;
