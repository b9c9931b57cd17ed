//! Shared latest-result slot for threaded detectors.
//!
//! An inference thread publishes completed observations; the frame loop
//! polls for the most recent one. The single mutex is the one
//! synchronization point between the two, so a 21-landmark set can never
//! be observed half-written.

use std::sync::{Arc, Mutex};

use airctl_common::error::AirctlResult;
use airctl_hand_model::landmark::HandObservation;
use airctl_hand_model::stream::TimestampMs;

use crate::LandmarkSource;

/// The latest completed detection and the timestamp it belongs to.
#[derive(Debug, Clone, Default)]
struct Slot {
    observation: Option<HandObservation>,
    timestamp_ms: TimestampMs,
}

/// Thread-safe latest-observation slot.
#[derive(Debug, Clone, Default)]
pub struct SharedObservation {
    slot: Arc<Mutex<Slot>>,
}

impl SharedObservation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a completed detection. Results older than the currently
    /// stored one are dropped; detectors may complete out of order.
    pub fn publish(&self, observation: Option<HandObservation>, timestamp_ms: TimestampMs) {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| {
            // A panicking publisher cannot leave a torn observation: the
            // slot is replaced wholesale, so the stored value is usable.
            poisoned.into_inner()
        });

        if timestamp_ms < slot.timestamp_ms {
            tracing::debug!(
                stale_ms = slot.timestamp_ms - timestamp_ms,
                "Dropping out-of-order detection result"
            );
            return;
        }

        slot.observation = observation;
        slot.timestamp_ms = timestamp_ms;
    }

    /// The most recent completed detection, if any.
    pub fn latest(&self) -> Option<HandObservation> {
        let slot = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.observation.clone()
    }

    /// Timestamp of the most recent completed detection (ms).
    pub fn latest_timestamp_ms(&self) -> TimestampMs {
        let slot = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.timestamp_ms
    }
}

/// The slot doubles as a landmark source: the detector thread publishes,
/// the frame loop submits and polls.
impl LandmarkSource for SharedObservation {
    fn submit(&mut self, _timestamp_ms: TimestampMs) -> AirctlResult<()> {
        // Frames reach the detector out of band; submit is a pacing hook.
        Ok(())
    }

    fn latest(&mut self) -> Option<HandObservation> {
        SharedObservation::latest(self)
    }

    fn name(&self) -> &str {
        "shared"
    }
}
