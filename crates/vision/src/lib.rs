//! Airctl Vision
//!
//! The seam between airctl and the hand-landmark detector. Detection is
//! asynchronous: a frame is handed off with `submit`, and `latest` returns
//! the most recently *completed* result, which may lag the submitted frame
//! or be absent entirely. The core treats whatever `latest` returns as
//! "the latest known hand pose", never as synchronized to the current
//! video frame.
//!
//! Also provides the JSONL observation stream reader/writer used for
//! recording and deterministic replay.

pub mod shared;
pub mod stream;

use airctl_common::error::AirctlResult;
use airctl_hand_model::landmark::HandObservation;
use airctl_hand_model::stream::TimestampMs;

/// Trait for landmark detection sources.
///
/// The two-phase submit/latest shape keeps the detector swappable: a real
/// detector runs inference off-thread and publishes into a shared slot,
/// while tests use a scripted source that returns canned observations.
pub trait LandmarkSource: Send {
    /// Hand a frame timestamp to the detector. Non-blocking; the result
    /// becomes visible through `latest` once inference completes.
    fn submit(&mut self, timestamp_ms: TimestampMs) -> AirctlResult<()>;

    /// The most recent completed detection, if any. Non-blocking; may be
    /// stale relative to the last submitted frame.
    fn latest(&mut self) -> Option<HandObservation>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// A scripted source that replays a fixed sequence of observations, one
/// per `latest` call. Used by tests and demos.
pub struct ScriptedSource {
    frames: std::collections::VecDeque<Option<HandObservation>>,
    /// Returned once the script runs out.
    tail: Option<HandObservation>,
}

impl ScriptedSource {
    /// Create a source that yields the given observations in order.
    pub fn new(frames: Vec<Option<HandObservation>>) -> Self {
        Self {
            frames: frames.into(),
            tail: None,
        }
    }

    /// Keep returning `tail` after the script is exhausted instead of None.
    pub fn with_tail(mut self, tail: Option<HandObservation>) -> Self {
        self.tail = tail;
        self
    }
}

impl LandmarkSource for ScriptedSource {
    fn submit(&mut self, _timestamp_ms: TimestampMs) -> AirctlResult<()> {
        Ok(())
    }

    fn latest(&mut self) -> Option<HandObservation> {
        match self.frames.pop_front() {
            Some(frame) => frame,
            None => self.tail.clone(),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
