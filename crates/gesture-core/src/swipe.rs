//! Dynamic swipe detection over a short wrist trajectory.
//!
//! Keeps a bounded window of timestamped wrist positions and emits a
//! directional swipe once both the absolute horizontal displacement and
//! the velocity across the window clear their thresholds. Comparing the
//! oldest against the newest sample (rather than consecutive-frame
//! deltas) smooths tracking jitter while staying responsive; requiring
//! displacement *and* velocity rejects slow drifts as well as
//! fast-but-tiny jitters.

use std::collections::VecDeque;

use airctl_common::config::GestureConfig;
use airctl_hand_model::labels::MotionLabel;
use airctl_hand_model::landmark::{HandObservation, Point2};

/// Configuration for the swipe detector.
#[derive(Debug, Clone)]
pub struct SwipeConfig {
    /// Number of wrist samples kept.
    pub window: usize,

    /// Minimum horizontal displacement across the window (normalized).
    pub min_distance: f64,

    /// Minimum velocity (normalized units per second).
    pub velocity_threshold: f64,

    /// Minimum time span across the window (seconds). Spans below this
    /// would amplify noise through the velocity division.
    pub min_span_secs: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            window: 10,
            min_distance: 0.15,
            velocity_threshold: 0.3,
            min_span_secs: 0.1,
        }
    }
}

impl From<&GestureConfig> for SwipeConfig {
    fn from(config: &GestureConfig) -> Self {
        Self {
            window: config.swipe_window,
            min_distance: config.swipe_min_distance,
            velocity_threshold: config.swipe_velocity_threshold,
            min_span_secs: config.swipe_min_span_secs,
        }
    }
}

/// One timestamped wrist sample.
#[derive(Debug, Clone, Copy)]
struct WristSample {
    position: Point2,
    t_secs: f64,
}

/// Velocity-based swipe detector.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    samples: VecDeque<WristSample>,
    config: SwipeConfig,
}

impl SwipeDetector {
    /// Create a detector with the given configuration.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            samples: VecDeque::with_capacity(config.window.max(3)),
            config,
        }
    }

    /// Create a detector with default thresholds.
    pub fn with_defaults() -> Self {
        Self::new(SwipeConfig::default())
    }

    /// Feed one frame; returns a swipe label if the trajectory qualifies.
    ///
    /// `now_secs` is monotonic session time. A missing observation leaves
    /// the trajectory untouched and yields no swipe.
    pub fn check(
        &mut self,
        observation: Option<&HandObservation>,
        now_secs: f64,
    ) -> Option<MotionLabel> {
        let hand = observation?;

        if self.samples.len() == self.config.window {
            self.samples.pop_front();
        }
        self.samples.push_back(WristSample {
            position: hand.wrist(),
            t_secs: now_secs,
        });

        if self.samples.len() < 3 {
            return None;
        }

        let first = self.samples.front()?;
        let last = self.samples.back()?;

        let dx = last.position.x - first.position.x;
        let dt = last.t_secs - first.t_secs;

        // Zero or negative spans happen when a detector replays stale
        // results; never divide by them.
        if dt < self.config.min_span_secs {
            return None;
        }

        if dx.abs() < self.config.min_distance {
            return None;
        }

        let velocity = dx / dt;
        if velocity.abs() > self.config.velocity_threshold {
            let label = if velocity > 0.0 {
                MotionLabel::SwipeRight
            } else {
                MotionLabel::SwipeLeft
            };
            tracing::debug!(swipe = %label, velocity, "Swipe detected");
            return Some(label);
        }

        None
    }

    /// Number of samples currently buffered.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airctl_hand_model::landmark::{Point2, LANDMARK_COUNT};
    use proptest::prelude::*;

    fn hand_at(x: f64) -> HandObservation {
        HandObservation::from_points(vec![Point2::new(x, 0.5); LANDMARK_COUNT]).unwrap()
    }

    /// Feed a trajectory of (x, t) samples; return the last result.
    fn run(detector: &mut SwipeDetector, samples: &[(f64, f64)]) -> Option<MotionLabel> {
        let mut result = None;
        for &(x, t) in samples {
            result = detector.check(Some(&hand_at(x)), t);
        }
        result
    }

    #[test]
    fn test_fast_rightward_motion_is_swipe_right() {
        let mut detector = SwipeDetector::with_defaults();
        // dx = 0.2 over dt = 0.3s: velocity ~0.67 > 0.3, distance > 0.15.
        let result = run(&mut detector, &[(0.3, 0.0), (0.4, 0.15), (0.5, 0.3)]);
        assert_eq!(result, Some(MotionLabel::SwipeRight));
    }

    #[test]
    fn test_fast_leftward_motion_is_swipe_left() {
        let mut detector = SwipeDetector::with_defaults();
        let result = run(&mut detector, &[(0.5, 0.0), (0.4, 0.15), (0.3, 0.3)]);
        assert_eq!(result, Some(MotionLabel::SwipeLeft));
    }

    #[test]
    fn test_small_displacement_is_rejected() {
        let mut detector = SwipeDetector::with_defaults();
        // dx = 0.05 over 0.3s: under the distance floor no matter how fast.
        let result = run(&mut detector, &[(0.30, 0.0), (0.32, 0.15), (0.35, 0.3)]);
        assert_eq!(result, None);
    }

    #[test]
    fn test_slow_drift_is_rejected() {
        let mut detector = SwipeDetector::with_defaults();
        // dx = 0.2 but over 1.0s: velocity 0.2 < 0.3.
        let result = run(&mut detector, &[(0.3, 0.0), (0.4, 0.5), (0.5, 1.0)]);
        assert_eq!(result, None);
    }

    #[test]
    fn test_degenerate_time_span_is_rejected() {
        let mut detector = SwipeDetector::with_defaults();
        // All samples inside 0.05s: below the minimum span.
        let result = run(&mut detector, &[(0.3, 0.0), (0.4, 0.02), (0.5, 0.05)]);
        assert_eq!(result, None);
    }

    #[test]
    fn test_needs_three_samples() {
        let mut detector = SwipeDetector::with_defaults();
        let result = run(&mut detector, &[(0.2, 0.0), (0.6, 0.3)]);
        assert_eq!(result, None);
    }

    #[test]
    fn test_missing_observation_yields_none_and_keeps_buffer() {
        let mut detector = SwipeDetector::with_defaults();
        run(&mut detector, &[(0.3, 0.0), (0.4, 0.15)]);
        assert_eq!(detector.check(None, 0.2), None);
        assert_eq!(detector.sample_count(), 2);
    }

    #[test]
    fn test_window_drops_oldest_samples() {
        let mut detector = SwipeDetector::new(SwipeConfig {
            window: 3,
            ..SwipeConfig::default()
        });
        // Old samples at x=0.1 roll out; the surviving window spans too
        // little distance to qualify.
        let result = run(
            &mut detector,
            &[
                (0.10, 0.0),
                (0.11, 0.2),
                (0.12, 0.4),
                (0.13, 0.6),
                (0.14, 0.8),
            ],
        );
        assert_eq!(result, None);
        assert_eq!(detector.sample_count(), 3);
    }

    proptest! {
        /// The sample buffer never exceeds the configured window.
        #[test]
        fn prop_buffer_is_bounded(xs in prop::collection::vec(0.0f64..1.0, 0..50)) {
            let mut detector = SwipeDetector::with_defaults();
            for (i, x) in xs.iter().enumerate() {
                detector.check(Some(&hand_at(*x)), i as f64 * 0.033);
                prop_assert!(detector.sample_count() <= 10);
            }
        }
    }
}
