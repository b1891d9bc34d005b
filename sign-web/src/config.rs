//! Recognizer tunables
//!
//! Defaults are the values the recognizer was tuned with. The per-gesture
//! geometric thresholds are fixed and live next to the rules that use them.

use serde::{Deserialize, Serialize};

use crate::error::RecognizerError;

/// Number of frames kept in every sliding window
pub const BUFFER_SIZE: usize = 12;

/// A label must fill this many slots of the window to be accepted
pub const STABLE_THRESHOLD: usize = 7;

/// Acceptances are suppressed for this long after one fires
pub const COOLDOWN_MS: f64 = 1800.0;

/// Wrist-x variance above which the hand counts as waving
pub const WAVE_VARIANCE_THRESHOLD: f32 = 0.03;

/// Oldest-minus-newest wrist-z above which the hand counts as pushed forward
pub const FORWARD_MOTION_THRESHOLD: f32 = 0.06;

/// Configuration for one recognizer session.
///
/// Deserialized from a plain JS object; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecognizerConfig {
    /// Capacity of the candidate and wrist history windows.
    pub buffer_size: usize,
    /// Votes a label needs inside the window before it is accepted.
    pub stable_threshold: usize,
    /// Quiet period after an acceptance (ms).
    pub cooldown_ms: f64,
    /// Minimum wrist-x variance for a wave.
    pub wave_variance_threshold: f32,
    /// Minimum forward wrist-z travel for a push.
    pub forward_motion_threshold: f32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            buffer_size: BUFFER_SIZE,
            stable_threshold: STABLE_THRESHOLD,
            cooldown_ms: COOLDOWN_MS,
            wave_variance_threshold: WAVE_VARIANCE_THRESHOLD,
            forward_motion_threshold: FORWARD_MOTION_THRESHOLD,
        }
    }
}

impl RecognizerConfig {
    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), RecognizerError> {
        if self.buffer_size == 0 {
            return Err(RecognizerError::InvalidConfig(
                "bufferSize must be at least 1".into(),
            ));
        }
        if self.stable_threshold == 0 || self.stable_threshold > self.buffer_size {
            return Err(RecognizerError::InvalidConfig(format!(
                "stableThreshold must be in 1..={} (got {})",
                self.buffer_size, self.stable_threshold
            )));
        }
        if !self.cooldown_ms.is_finite() || self.cooldown_ms < 0.0 {
            return Err(RecognizerError::InvalidConfig(format!(
                "cooldownMs must be a non-negative number (got {})",
                self.cooldown_ms
            )));
        }
        for (name, value) in [
            ("waveVarianceThreshold", self.wave_variance_threshold),
            ("forwardMotionThreshold", self.forward_motion_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RecognizerError::InvalidConfig(format!(
                    "{} must be a non-negative number (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
