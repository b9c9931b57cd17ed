//! Airctl Hand Model
//!
//! Defines the core data contracts for airctl:
//! - **Landmarks:** 21-point normalized hand observations with the fixed
//!   anatomical index scheme
//! - **Labels:** static pose labels, dynamic motion labels, and the final
//!   arbitrated gesture signal
//! - **Streams:** timestamped observation frames and the JSONL stream header
//!
//! All coordinates are normalized to `[0.0, 1.0]` range relative to the
//! camera frame so downstream consumers never depend on capture resolution.

pub mod labels;
pub mod landmark;
pub mod stream;

pub use labels::*;
pub use landmark::*;
pub use stream::*;
