//! Majority-vote stabilizer
//!
//! Every frame pushes its candidate (or a miss) into a sliding window. A label
//! is accepted once it holds at least `stable_threshold` slots, is the most
//! frequent label in the window, and the cooldown guard lets it through.
//!
//! Ties go to the label that appears first when scanning the window from
//! oldest to newest.

use log::trace;

use super::cooldown::CooldownGuard;
use crate::classifier::{SignLabel, SlidingWindow};

/// Sliding-window vote over per-frame candidates
pub struct TemporalStabilizer {
    window: SlidingWindow<Option<SignLabel>>,
    stable_threshold: usize,
}

impl TemporalStabilizer {
    pub fn new(buffer_size: usize, stable_threshold: usize) -> Self {
        Self {
            window: SlidingWindow::new(buffer_size),
            stable_threshold,
        }
    }

    /// Push one frame's candidate and return the label to accept, if any.
    ///
    /// Does not clear the window or touch the guard; the caller records the
    /// acceptance.
    pub fn observe(
        &mut self,
        candidate: Option<SignLabel>,
        guard: &CooldownGuard,
    ) -> Option<SignLabel> {
        self.window.push(candidate);

        let (label, count) = self.tally()?;
        if count < self.stable_threshold {
            return None;
        }

        if !guard.permits(label) {
            trace!(
                "{} stable ({}/{}) but held back by cooldown/repeat guard",
                label,
                count,
                self.window.len()
            );
            return None;
        }

        Some(label)
    }

    /// Most frequent label in the window with its count
    pub fn tally(&self) -> Option<(SignLabel, usize)> {
        // Insertion order is first-seen order, which settles ties
        let mut counts: Vec<(SignLabel, usize)> = Vec::new();
        for label in self.window.iter().flatten() {
            match counts.iter_mut().find(|entry| entry.0 == *label) {
                Some((_, count)) => *count += 1,
                None => counts.push((*label, 1)),
            }
        }

        counts
            .into_iter()
            .fold(None, |best, (label, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((label, count)),
            })
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn clear(&mut self) {
        self.window.clear();
    }
}
