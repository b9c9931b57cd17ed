//! Temporal confirmation: hysteresis over raw per-frame labels.
//!
//! Per-frame classification flickers. The confirmation filter keeps a
//! bounded window of the most recent raw labels and only replaces the
//! confirmed label once the same raw label has filled the whole window.
//! The confirmed label never reverts to Idle just because one frame
//! disagrees; stability costs roughly one window of latency.

use std::collections::VecDeque;

use airctl_hand_model::labels::PoseLabel;

/// Sliding-window confirmation filter for pose labels.
#[derive(Debug, Clone)]
pub struct ConfirmationFilter {
    history: VecDeque<PoseLabel>,
    confirmed: PoseLabel,
    window: usize,
}

impl ConfirmationFilter {
    /// Create a filter requiring `window` consecutive identical frames.
    pub fn new(window: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(window.max(1)),
            confirmed: PoseLabel::Idle,
            window: window.max(1),
        }
    }

    /// Feed one raw label; returns the (possibly updated) confirmed label.
    pub fn update(&mut self, raw: PoseLabel) -> PoseLabel {
        if self.history.len() == self.window {
            self.history.pop_front();
        }
        self.history.push_back(raw);

        if self.history.len() == self.window && self.history.iter().all(|&label| label == raw) {
            if self.confirmed != raw {
                tracing::debug!(gesture = %raw, "Confirmed gesture changed");
            }
            self.confirmed = raw;
        }

        self.confirmed
    }

    /// The current confirmed label.
    pub fn confirmed(&self) -> PoseLabel {
        self.confirmed
    }

    /// Number of consecutive identical frames required.
    pub fn window(&self) -> usize {
        self.window
    }
}
