//! Gesture label types.

use serde::{Deserialize, Serialize};

/// Instantaneous classification of hand shape from a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseLabel {
    /// No hand, or no recognized shape.
    #[default]
    Idle,
    OpenPalm,
    Fist,
    IndexFinger,
    Pinch,
    TwoFingers,
    ThumbsUp,
    ThumbsDown,
}

/// Classification of hand trajectory over a short time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionLabel {
    SwipeLeft,
    SwipeRight,
}

/// The final arbitrated gesture for one frame.
///
/// A motion label strictly preempts the confirmed pose: the two are never
/// both dispatched for the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureSignal {
    Pose(PoseLabel),
    Motion(MotionLabel),
}

impl std::fmt::Display for PoseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PoseLabel::Idle => "Idle",
            PoseLabel::OpenPalm => "Open Palm",
            PoseLabel::Fist => "Fist",
            PoseLabel::IndexFinger => "Index Finger",
            PoseLabel::Pinch => "Pinch",
            PoseLabel::TwoFingers => "Two Fingers",
            PoseLabel::ThumbsUp => "Thumbs Up",
            PoseLabel::ThumbsDown => "Thumbs Down",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for MotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MotionLabel::SwipeLeft => "Swipe Left",
            MotionLabel::SwipeRight => "Swipe Right",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for GestureSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureSignal::Pose(pose) => pose.fmt(f),
            GestureSignal::Motion(motion) => motion.fmt(f),
        }
    }
}

impl GestureSignal {
    /// Arbitrate between an optional motion label and the confirmed pose.
    pub fn arbitrate(motion: Option<MotionLabel>, pose: PoseLabel) -> Self {
        match motion {
            Some(motion) => GestureSignal::Motion(motion),
            None => GestureSignal::Pose(pose),
        }
    }
}
