//! Observation stream wire contract.
//!
//! Landmark detectors feed airctl one JSONL frame per line; recorded
//! sessions use the same format so a run can be replayed deterministically.
//! The first line of a stream file is a `# `-prefixed header.

use serde::{Deserialize, Serialize};

use crate::landmark::HandObservation;

/// Monotonic timestamp in milliseconds since session start.
pub type TimestampMs = u64;

/// One frame of detector output: a timestamp and zero or one hand.
///
/// `hand: None` means no hand was detected this frame. That is a normal
/// state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationFrame {
    /// Monotonic milliseconds since session start.
    #[serde(rename = "t")]
    pub timestamp_ms: TimestampMs,

    /// The detected hand, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand: Option<HandObservation>,
}

impl ObservationFrame {
    /// Create a frame with a detected hand.
    pub fn with_hand(timestamp_ms: TimestampMs, hand: HandObservation) -> Self {
        Self {
            timestamp_ms,
            hand: Some(hand),
        }
    }

    /// Create an empty frame (no hand detected).
    pub fn empty(timestamp_ms: TimestampMs) -> Self {
        Self {
            timestamp_ms,
            hand: None,
        }
    }
}

/// Stream metadata written as the first line of a recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationStreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time at session start (ISO 8601).
    pub epoch_wall: String,

    /// Detector identifier (e.g., "hand_landmarker").
    pub source: String,

    /// Camera frame dimensions in pixels.
    pub frame_width: u32,
    pub frame_height: u32,
}

impl ObservationStreamHeader {
    /// Current schema version.
    pub const SCHEMA_VERSION: &'static str = "1.0";

    pub fn new(epoch_wall: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            schema_version: Self::SCHEMA_VERSION.to_string(),
            epoch_wall: epoch_wall.into(),
            source: source.into(),
            frame_width: 640,
            frame_height: 480,
        }
    }
}
