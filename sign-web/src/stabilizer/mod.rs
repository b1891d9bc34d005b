//! Stabilizer module - debouncing per-frame candidates
//!
//! Re-exports only. All logic in submodules.

mod cooldown;
mod vote;

pub use cooldown::CooldownGuard;
pub use vote::TemporalStabilizer;
