//! Motion module - wrist trajectory over recent frames
//!
//! Re-exports only. All logic in submodules.

mod tracker;

pub use tracker::{MotionSignals, MotionTracker};
