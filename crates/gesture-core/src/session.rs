//! The per-frame gesture session pipeline.
//!
//! Owns all mutable recognition state for one hand-control session:
//! the confirmation window, the swipe trajectory, and the action cooldown
//! gate. Sessions are self-contained values, so tests (and multi-session
//! embedders) construct as many independent ones as they like.

use airctl_common::config::GestureConfig;
use airctl_hand_model::labels::{GestureSignal, PoseLabel};
use airctl_hand_model::landmark::HandObservation;

use crate::classifier::{ClassifierConfig, PoseClassifier};
use crate::confirm::ConfirmationFilter;
use crate::cooldown::CooldownGate;
use crate::swipe::{SwipeConfig, SwipeDetector};

/// All recognition state for one session.
#[derive(Debug)]
pub struct GestureSession {
    classifier: PoseClassifier,
    confirmation: ConfirmationFilter,
    swipe: SwipeDetector,
    gate: CooldownGate,
}

impl GestureSession {
    /// Create a session from recognition configuration.
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            classifier: PoseClassifier::new(ClassifierConfig::from(config)),
            confirmation: ConfirmationFilter::new(config.confirmation_frames),
            swipe: SwipeDetector::new(SwipeConfig::from(config)),
            gate: CooldownGate::new(config.action_cooldown_ms),
        }
    }

    /// Create a session with default thresholds.
    pub fn with_defaults() -> Self {
        Self::new(&GestureConfig::default())
    }

    /// Process one frame into the final arbitrated gesture signal.
    ///
    /// `now_ms` is monotonic session time. Classification runs through the
    /// confirmation filter; the swipe detector runs on the same frame; a
    /// detected swipe preempts the confirmed pose.
    pub fn process(&mut self, observation: Option<&HandObservation>, now_ms: u64) -> GestureSignal {
        let raw = self.classifier.classify(observation);
        let confirmed = self.confirmation.update(raw);

        let motion = self.swipe.check(observation, now_ms as f64 / 1_000.0);

        GestureSignal::arbitrate(motion, confirmed)
    }

    /// The currently confirmed pose label.
    pub fn confirmed(&self) -> PoseLabel {
        self.confirmation.confirmed()
    }

    /// The shared cooldown gate, for the dispatcher.
    pub fn gate_mut(&mut self) -> &mut CooldownGate {
        &mut self.gate
    }

    /// Read-only access to the cooldown gate.
    pub fn gate(&self) -> &CooldownGate {
        &self.gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::fixtures::{hand, HandShape};
    use airctl_hand_model::labels::MotionLabel;
    use airctl_hand_model::landmark::{HandObservation, Point2};

    #[test]
    fn test_confirmation_transitions_on_fifth_frame() {
        let mut session = GestureSession::with_defaults();
        let open = hand(HandShape::open());

        // Idle for 5 frames: nothing detected.
        for frame in 0..5 {
            let signal = session.process(None, frame * 33);
            assert_eq!(signal, GestureSignal::Pose(PoseLabel::Idle));
        }

        // OpenPalm becomes the confirmed signal exactly on its 5th frame.
        for frame in 0..5 {
            let signal = session.process(Some(&open), (5 + frame) * 33);
            let expected = if frame < 4 {
                PoseLabel::Idle
            } else {
                PoseLabel::OpenPalm
            };
            assert_eq!(signal, GestureSignal::Pose(expected), "frame {frame}");
        }
    }

    #[test]
    fn test_swipe_preempts_confirmed_pose() {
        let mut session = GestureSession::with_defaults();

        // Confirm an open palm first.
        let open = hand(HandShape::open());
        for frame in 0..5 {
            session.process(Some(&open), frame * 33);
        }
        assert_eq!(session.confirmed(), PoseLabel::OpenPalm);

        // Now sweep the whole hand right, fast.
        let mut now = 5 * 33;
        let mut last = GestureSignal::Pose(PoseLabel::Idle);
        for step in 0..10 {
            let points: Vec<Point2> = hand(HandShape::open())
                .points()
                .iter()
                .map(|p| Point2::new((p.x + step as f64 * 0.04).min(1.0), p.y))
                .collect();
            let moved = HandObservation::from_points(points).unwrap();
            last = session.process(Some(&moved), now);
            now += 50;
        }

        assert_eq!(last, GestureSignal::Motion(MotionLabel::SwipeRight));
    }

    #[test]
    fn test_stationary_hand_never_swipes() {
        let mut session = GestureSession::with_defaults();
        let fist = hand(HandShape::default());

        for frame in 0..30 {
            let signal = session.process(Some(&fist), frame * 33);
            assert!(
                matches!(signal, GestureSignal::Pose(_)),
                "unexpected motion at frame {frame}"
            );
        }
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = GestureSession::with_defaults();
        let mut b = GestureSession::with_defaults();
        let open = hand(HandShape::open());

        for frame in 0..5 {
            a.process(Some(&open), frame * 33);
            b.process(None, frame * 33);
        }

        assert_eq!(a.confirmed(), PoseLabel::OpenPalm);
        assert_eq!(b.confirmed(), PoseLabel::Idle);
    }
}
