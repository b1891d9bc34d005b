//! Cooldown and repeat guard
//!
//! After an acceptance the guard is armed for `cooldown_ms`; while armed no
//! label may be accepted. Independently, the last accepted label can never be
//! accepted again until some other label has been accepted in between, even
//! once the cooldown is over.

use crate::classifier::SignLabel;

/// Acceptance gate shared by the stabilizer and the session
#[derive(Clone, Debug)]
pub struct CooldownGuard {
    last_accepted: Option<SignLabel>,
    /// Timestamp (ms) the cooldown was armed at; `None` when released
    armed_at_ms: Option<f64>,
    cooldown_ms: f64,
}

impl CooldownGuard {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            last_accepted: None,
            armed_at_ms: None,
            cooldown_ms,
        }
    }

    /// Record an acceptance and arm the cooldown
    pub fn accept(&mut self, label: SignLabel, now_ms: f64) {
        self.last_accepted = Some(label);
        self.armed_at_ms = Some(now_ms);
    }

    pub fn is_active(&self) -> bool {
        self.armed_at_ms.is_some()
    }

    /// Whether an armed cooldown has run its course by `now_ms`.
    ///
    /// A clock that went backwards or a non-finite timestamp counts as due,
    /// so a broken clock can never hold the cooldown forever.
    pub fn is_due(&self, now_ms: f64) -> bool {
        match self.armed_at_ms {
            None => false,
            Some(armed_at) if !now_ms.is_finite() || !armed_at.is_finite() => true,
            Some(armed_at) => now_ms < armed_at || now_ms - armed_at >= self.cooldown_ms,
        }
    }

    /// Release the cooldown. `last_accepted` is kept.
    pub fn expire(&mut self) {
        self.armed_at_ms = None;
    }

    pub fn last_accepted(&self) -> Option<SignLabel> {
        self.last_accepted
    }

    /// Would `label` be let through right now?
    pub fn permits(&self, label: SignLabel) -> bool {
        !self.is_active() && self.last_accepted != Some(label)
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
        self.armed_at_ms = None;
    }
}
