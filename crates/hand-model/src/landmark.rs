//! Hand landmark geometry.
//!
//! A hand observation is exactly 21 normalized 2-D keypoints indexed by a
//! fixed anatomical scheme (wrist, then four joints per digit ordered from
//! the palm outward). Observations are produced once per frame by the
//! landmark detector and are read-only to the gesture core.

use serde::{Deserialize, Serialize};

/// Number of landmarks in a complete hand observation.
pub const LANDMARK_COUNT: usize = 21;

/// Landmark indices for the fixed 21-point hand topology.
///
/// Non-thumb fingers are ordered MCP → PIP → DIP → TIP; the thumb is
/// ordered CMC → MCP → IP → TIP.
pub mod index {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// A normalized 2-D point in `[0.0, 1.0]` image space.
///
/// Image y grows downward: y = 0.0 is the top of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point in normalized units.
    pub fn distance(&self, other: &Point2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Convert to pixel coordinates for a frame of the given size.
    pub fn to_pixels(&self, width: u32, height: u32) -> (i32, i32) {
        (
            (self.x * width as f64) as i32,
            (self.y * height as f64) as i32,
        )
    }
}

/// A single hand's landmarks for one frame: exactly 21 points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2>", into = "Vec<Point2>")]
pub struct HandObservation {
    points: [Point2; LANDMARK_COUNT],
}

impl HandObservation {
    /// Build an observation from exactly 21 points. Any other count is a
    /// malformed detector result and is rejected so downstream code never
    /// indexes out of range.
    pub fn from_points(points: Vec<Point2>) -> Option<Self> {
        let points: [Point2; LANDMARK_COUNT] = points.try_into().ok()?;
        Some(Self { points })
    }

    /// The landmark at the given anatomical index.
    pub fn point(&self, idx: usize) -> Point2 {
        self.points[idx]
    }

    /// The wrist landmark, the reference point for swipe trajectories.
    pub fn wrist(&self) -> Point2 {
        self.points[index::WRIST]
    }

    /// The index fingertip, the reference point for pointer movement.
    pub fn index_tip(&self) -> Point2 {
        self.points[index::INDEX_TIP]
    }

    /// All 21 landmarks in index order.
    pub fn points(&self) -> &[Point2; LANDMARK_COUNT] {
        &self.points
    }
}

impl TryFrom<Vec<Point2>> for HandObservation {
    type Error = String;

    fn try_from(points: Vec<Point2>) -> Result<Self, Self::Error> {
        let count = points.len();
        Self::from_points(points)
            .ok_or_else(|| format!("expected {LANDMARK_COUNT} landmarks, got {count}"))
    }
}

impl From<HandObservation> for Vec<Point2> {
    fn from(obs: HandObservation) -> Self {
        obs.points.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(0.3, 0.4);
        assert!((a.distance(&b) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_to_pixels() {
        let p = Point2::new(0.5, 0.25);
        assert_eq!(p.to_pixels(640, 480), (320, 120));
    }

    #[test]
    fn test_malformed_observation_rejected() {
        assert!(HandObservation::from_points(vec![Point2::default(); 20]).is_none());
        assert!(HandObservation::from_points(vec![Point2::default(); 22]).is_none());
        assert!(HandObservation::from_points(vec![Point2::default(); 21]).is_some());
    }

    #[test]
    fn test_serde_rejects_short_point_list() {
        let points = vec![Point2::default(); 5];
        let json = serde_json::to_string(&points).unwrap();
        assert!(serde_json::from_str::<HandObservation>(&json).is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut points = vec![Point2::default(); LANDMARK_COUNT];
        points[index::INDEX_TIP] = Point2::new(0.4, 0.2);
        let obs = HandObservation::from_points(points).unwrap();

        let json = serde_json::to_string(&obs).unwrap();
        let parsed: HandObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.index_tip(), Point2::new(0.4, 0.2));
    }
}
