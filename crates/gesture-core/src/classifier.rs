//! Static pose classification: the per-frame geometric classifier.
//!
//! Maps one hand observation to a pose label using finger-extension tests
//! and a thumb-specific heuristic.
//!
//! # Algorithm
//!
//! 1. **Orientation:** the hand is upright iff the wrist sits visually
//!    below the palm base (wrist.y > middle-MCP.y; image y grows downward).
//! 2. **Fingers:** each non-thumb finger is extended iff its TIP is above
//!    its PIP; the comparison flips when the hand is inverted.
//! 3. **Thumb:** extended iff the thumb TIP is farther from the pinky MCP
//!    than the thumb IP is. The opposite side of the palm is a
//!    rotation-invariant reference, so this test needs no orientation flip.
//! 4. **Pinch first:** thumb-to-index fingertip distance below the pinch
//!    threshold wins over every other rule, since a pinch naturally folds
//!    the index tip near the thumb and would otherwise misfire the
//!    pointing rules.
//! 5. **Shape rules:** open palm, pointing, two fingers, then the
//!    fist/thumbs family when all four non-thumb fingers are folded.

use airctl_common::config::GestureConfig;
use airctl_hand_model::landmark::{index, HandObservation};
use airctl_hand_model::labels::PoseLabel;

/// Configuration for the static pose classifier.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Normalized thumb-to-index distance below which a pinch is declared.
    pub pinch_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.05,
        }
    }
}

impl From<&GestureConfig> for ClassifierConfig {
    fn from(config: &GestureConfig) -> Self {
        Self {
            pinch_threshold: config.pinch_threshold,
        }
    }
}

/// Extension state of the five digits, thumb first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FingerStates {
    thumb: bool,
    index: bool,
    middle: bool,
    ring: bool,
    pinky: bool,
}

impl FingerStates {
    fn all(&self) -> bool {
        self.thumb && self.index && self.middle && self.ring && self.pinky
    }

    /// All four non-thumb fingers folded.
    fn fingers_folded(&self) -> bool {
        !self.index && !self.middle && !self.ring && !self.pinky
    }
}

/// The static pose classifier. Stateless; one instance serves any number
/// of sessions.
#[derive(Debug, Clone, Default)]
pub struct PoseClassifier {
    config: ClassifierConfig,
}

impl PoseClassifier {
    /// Create a classifier with the given configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Create a classifier with default thresholds.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Classify one frame. An absent observation is Idle.
    pub fn classify(&self, observation: Option<&HandObservation>) -> PoseLabel {
        let Some(hand) = observation else {
            return PoseLabel::Idle;
        };

        let is_upright = hand.point(index::WRIST).y > hand.point(index::MIDDLE_MCP).y;
        let fingers = Self::finger_states(hand, is_upright);

        let pinch_dist = hand
            .point(index::THUMB_TIP)
            .distance(&hand.point(index::INDEX_TIP));

        // Pinch wins over everything else.
        if pinch_dist < self.config.pinch_threshold {
            return PoseLabel::Pinch;
        }

        if fingers.all() {
            return PoseLabel::OpenPalm;
        }

        // Pointing: index up, middle/ring/pinky down. The thumb is allowed
        // to be loose in both pointing shapes.
        if fingers.index && !fingers.middle && !fingers.ring && !fingers.pinky {
            return PoseLabel::IndexFinger;
        }

        if fingers.index && fingers.middle && !fingers.ring && !fingers.pinky {
            return PoseLabel::TwoFingers;
        }

        if fingers.fingers_folded() {
            return Self::classify_fist_family(hand, is_upright);
        }

        PoseLabel::Idle
    }

    /// Disambiguate Fist / ThumbsUp / ThumbsDown once all four non-thumb
    /// fingers are folded, using thumb TIP vs IP vertical order.
    ///
    /// Known weak point: the ThumbsDown test fires whenever the thumb
    /// points downward in image space, regardless of orientation, so a
    /// fist with a sagging thumb can read as ThumbsDown.
    fn classify_fist_family(hand: &HandObservation, is_upright: bool) -> PoseLabel {
        let thumb_tip_y = hand.point(index::THUMB_TIP).y;
        let thumb_ip_y = hand.point(index::THUMB_IP).y;

        if thumb_tip_y < thumb_ip_y && is_upright {
            return PoseLabel::ThumbsUp;
        }

        if thumb_tip_y > thumb_ip_y {
            return PoseLabel::ThumbsDown;
        }

        PoseLabel::Fist
    }

    /// Extension tests for all five digits.
    fn finger_states(hand: &HandObservation, is_upright: bool) -> FingerStates {
        let extended = |tip: usize, pip: usize| {
            if is_upright {
                hand.point(tip).y < hand.point(pip).y
            } else {
                hand.point(tip).y > hand.point(pip).y
            }
        };

        // Thumb extension is measured against the opposite side of the
        // palm, which survives rotation and mirroring.
        let pinky_mcp = hand.point(index::PINKY_MCP);
        let dist_tip = hand.point(index::THUMB_TIP).distance(&pinky_mcp);
        let dist_ip = hand.point(index::THUMB_IP).distance(&pinky_mcp);

        FingerStates {
            thumb: dist_tip > dist_ip,
            index: extended(index::INDEX_TIP, index::INDEX_PIP),
            middle: extended(index::MIDDLE_TIP, index::MIDDLE_PIP),
            ring: extended(index::RING_TIP, index::RING_PIP),
            pinky: extended(index::PINKY_TIP, index::PINKY_PIP),
        }
    }
}
