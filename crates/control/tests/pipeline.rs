//! End-to-end pipeline tests: observations through the gesture session
//! into dispatched effects.

use airctl_common::config::GestureConfig;
use airctl_common::error::AirctlResult;
use airctl_control::dispatcher::ActionDispatcher;
use airctl_control::{ControlBackend, TabDirection};
use airctl_gesture_core::GestureSession;
use airctl_hand_model::landmark::{index, HandObservation, Point2, LANDMARK_COUNT};
use airctl_vision::{LandmarkSource, ScriptedSource};

/// Records requested effects instead of injecting them.
#[derive(Default)]
struct RecordingBackend {
    effects: Vec<String>,
}

impl ControlBackend for RecordingBackend {
    fn move_pointer(&mut self, _x: f64, _y: f64) -> AirctlResult<()> {
        self.effects.push("move".into());
        Ok(())
    }

    fn click(&mut self) -> AirctlResult<()> {
        self.effects.push("click".into());
        Ok(())
    }

    fn scroll(&mut self, amount: f64) -> AirctlResult<()> {
        self.effects
            .push(if amount > 0.0 { "scroll_up" } else { "scroll_down" }.into());
        Ok(())
    }

    fn volume_up(&mut self) -> AirctlResult<()> {
        self.effects.push("volume_up".into());
        Ok(())
    }

    fn volume_down(&mut self) -> AirctlResult<()> {
        self.effects.push("volume_down".into());
        Ok(())
    }

    fn lock_screen(&mut self) -> AirctlResult<()> {
        self.effects.push("lock_screen".into());
        Ok(())
    }

    fn switch_tab(&mut self, direction: TabDirection) -> AirctlResult<()> {
        self.effects.push(format!("switch_tab({direction})"));
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// An upright hand with thumb and all four fingers folded into a fist
/// shape, then reshaped per gesture below.
fn base_hand() -> Vec<Point2> {
    let mut points = vec![Point2::default(); LANDMARK_COUNT];
    points[index::WRIST] = Point2::new(0.5, 0.9);

    points[index::THUMB_CMC] = Point2::new(0.32, 0.78);
    points[index::THUMB_MCP] = Point2::new(0.28, 0.70);
    points[index::THUMB_IP] = Point2::new(0.25, 0.62);
    points[index::THUMB_TIP] = Point2::new(0.33, 0.62);

    for (mcp, x) in [
        (index::INDEX_MCP, 0.40),
        (index::MIDDLE_MCP, 0.47),
        (index::RING_MCP, 0.54),
        (index::PINKY_MCP, 0.61),
    ] {
        points[mcp] = Point2::new(x, 0.60);
        points[mcp + 1] = Point2::new(x, 0.50);
        points[mcp + 2] = Point2::new(x, 0.45);
        points[mcp + 3] = Point2::new(x, 0.68);
    }

    points
}

fn extend_finger(points: &mut [Point2], mcp: usize, tip_y: f64) {
    let x = points[mcp].x;
    points[mcp + 3] = Point2::new(x, tip_y);
}

/// Thumb tip pressed against the index fingertip.
fn pinch_hand(tip_y: f64) -> HandObservation {
    let mut points = base_hand();
    extend_finger(&mut points, index::INDEX_MCP, tip_y);
    points[index::THUMB_TIP] = Point2::new(0.40, tip_y + 0.02);
    HandObservation::from_points(points).unwrap()
}

/// Index and middle fingers extended, tips at the given height.
fn two_finger_hand(tip_y: f64) -> HandObservation {
    let mut points = base_hand();
    extend_finger(&mut points, index::INDEX_MCP, tip_y);
    extend_finger(&mut points, index::MIDDLE_MCP, tip_y);
    HandObservation::from_points(points).unwrap()
}

/// All five digits extended, shifted horizontally by `dx`.
fn open_hand_at(dx: f64) -> HandObservation {
    let mut points = base_hand();
    points[index::THUMB_TIP] = Point2::new(0.20, 0.55);
    for mcp in [
        index::INDEX_MCP,
        index::MIDDLE_MCP,
        index::RING_MCP,
        index::PINKY_MCP,
    ] {
        extend_finger(&mut points, mcp, 0.40);
    }
    let points = points
        .into_iter()
        .map(|p| Point2::new((p.x + dx).clamp(0.0, 1.0), p.y))
        .collect();
    HandObservation::from_points(points).unwrap()
}

struct Pipeline {
    session: GestureSession,
    dispatcher: ActionDispatcher,
    backend: RecordingBackend,
}

impl Pipeline {
    fn new() -> Self {
        Self {
            session: GestureSession::new(&GestureConfig::default()),
            dispatcher: ActionDispatcher::with_defaults(),
            backend: RecordingBackend::default(),
        }
    }

    fn frame(&mut self, hand: Option<&HandObservation>, now_ms: u64) {
        let signal = self.session.process(hand, now_ms);
        self.dispatcher.dispatch(
            signal,
            hand,
            self.session.gate_mut(),
            now_ms,
            &mut self.backend,
        );
    }
}

#[test]
fn pinch_held_clicks_once_then_keeps_dragging() {
    let mut pipeline = Pipeline::new();
    let pinch = pinch_hand(0.40);

    // 5 frames to confirm, then a few more inside the cooldown.
    for i in 0..8 {
        pipeline.frame(Some(&pinch), 1_000 + i * 33);
    }

    let clicks = pipeline
        .backend
        .effects
        .iter()
        .filter(|e| *e == "click")
        .count();
    let moves = pipeline
        .backend
        .effects
        .iter()
        .filter(|e| *e == "move")
        .count();

    assert_eq!(clicks, 1, "gate must suppress repeat clicks");
    // Pointer follows the pinch on every confirmed frame (4 of 8).
    assert_eq!(moves, 4);
}

#[test]
fn fresh_session_clicks_within_the_first_cooldown_window() {
    let mut pipeline = Pipeline::new();
    let pinch = pinch_hand(0.40);

    // Confirmation completes at 132 ms, well inside the first 500 ms of
    // session time; the gate has never fired and must not block it.
    for i in 0..5 {
        pipeline.frame(Some(&pinch), i * 33);
    }

    let clicks = pipeline
        .backend
        .effects
        .iter()
        .filter(|e| *e == "click")
        .count();
    assert_eq!(clicks, 1, "a fresh gate must not block the first click");
}

#[test]
fn rising_two_finger_hand_scrolls_up_after_anchor_frame() {
    let mut pipeline = Pipeline::new();

    // Confirm the pose at a fixed height first, with the fingertips
    // clearly above the PIPs (which sit at y = 0.50 in base_hand).
    for i in 0..5 {
        pipeline.frame(Some(&two_finger_hand(0.40)), 1_000 + i * 33);
    }
    assert!(pipeline.backend.effects.is_empty(), "anchor frame must not scroll");

    // Fingertips rise 0.02 per frame: each confirmed frame scrolls up.
    pipeline.frame(Some(&two_finger_hand(0.38)), 1_200);
    pipeline.frame(Some(&two_finger_hand(0.36)), 1_233);

    assert_eq!(pipeline.backend.effects, vec!["scroll_up", "scroll_up"]);
}

#[test]
fn fast_sweep_switches_tab_exactly_once_per_cooldown() {
    let mut pipeline = Pipeline::new();

    // Sweep right at 0.04 normalized units per 50 ms frame.
    for step in 0..10u64 {
        pipeline.frame(Some(&open_hand_at(step as f64 * 0.04)), 1_000 + step * 50);
    }

    let switches = pipeline
        .backend
        .effects
        .iter()
        .filter(|e| e.as_str() == "switch_tab(right)")
        .count();
    assert_eq!(switches, 1, "cooldown must serialize tab switches");

    // Swipe frames must carry no pointer or scroll effects.
    assert!(pipeline
        .backend
        .effects
        .iter()
        .all(|e| e.starts_with("switch_tab")));
}

#[test]
fn stale_detector_results_drive_the_pipeline_like_live_ones() {
    let mut pipeline = Pipeline::new();
    let pinch = pinch_hand(0.40);

    // Two completed detections, then the detector keeps reporting its
    // last result while inference lags behind the frame loop.
    let mut source = ScriptedSource::new(vec![Some(pinch.clone()), Some(pinch.clone())])
        .with_tail(Some(pinch));

    for i in 0..6u64 {
        source.submit(i * 33).unwrap();
        let hand = source.latest();
        pipeline.frame(hand.as_ref(), i * 33);
    }

    // Confirmation still lands on the 5th frame: one click, then drag.
    let clicks = pipeline
        .backend
        .effects
        .iter()
        .filter(|e| *e == "click")
        .count();
    let moves = pipeline
        .backend
        .effects
        .iter()
        .filter(|e| *e == "move")
        .count();
    assert_eq!(clicks, 1);
    assert_eq!(moves, 2);
}

#[test]
fn hand_loss_mid_gesture_is_a_noop() {
    let mut pipeline = Pipeline::new();
    let pinch = pinch_hand(0.40);

    for i in 0..5 {
        pipeline.frame(Some(&pinch), 1_000 + i * 33);
    }
    let before = pipeline.backend.effects.len();

    // Detector gap: confirmed label persists but nothing is dispatched.
    for i in 0..5 {
        pipeline.frame(None, 1_200 + i * 33);
    }

    assert_eq!(pipeline.backend.effects.len(), before);
}
