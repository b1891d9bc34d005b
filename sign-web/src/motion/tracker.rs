//! Wrist motion tracking
//!
//! Keeps the recent wrist x and z positions and derives two signals:
//! - oscillating: wrist x variance over the window is above the wave threshold
//! - forward motion: the wrist moved toward the camera (z shrank) by more than
//!   the push threshold between the oldest and newest sample

use crate::bridge::HandLandmark;
use crate::classifier::SlidingWindow;
use crate::config::RecognizerConfig;

/// Motion derived from the wrist history after one update
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionSignals {
    pub oscillating: bool,
    pub forward_motion: bool,
    /// Population variance of wrist x over the window
    pub variance_x: f32,
    /// Oldest z minus newest z (positive = toward the camera)
    pub forward_delta: f32,
}

/// Wrist history for a single tracked hand
pub struct MotionTracker {
    wrist_x: SlidingWindow<f32>,
    wrist_z: SlidingWindow<f32>,
    wave_variance_threshold: f32,
    forward_motion_threshold: f32,
}

impl MotionTracker {
    pub fn new(config: &RecognizerConfig) -> Self {
        Self {
            wrist_x: SlidingWindow::new(config.buffer_size),
            wrist_z: SlidingWindow::new(config.buffer_size),
            wave_variance_threshold: config.wave_variance_threshold,
            forward_motion_threshold: config.forward_motion_threshold,
        }
    }

    /// Record this frame's wrist and recompute both signals
    pub fn update(&mut self, wrist: HandLandmark) -> MotionSignals {
        self.wrist_x.push(wrist.x);
        self.wrist_z.push(wrist.z);

        let variance_x = variance(self.wrist_x.iter().copied());

        // Need two samples before there is any travel to measure
        let forward_delta = match (self.wrist_z.oldest(), self.wrist_z.newest()) {
            (Some(oldest), Some(newest)) if self.wrist_z.len() >= 2 => oldest - newest,
            _ => 0.0,
        };

        MotionSignals {
            oscillating: variance_x > self.wave_variance_threshold,
            forward_motion: forward_delta > self.forward_motion_threshold,
            variance_x,
            forward_delta,
        }
    }

    /// (wrist x samples, wrist z samples)
    pub fn history_len(&self) -> (usize, usize) {
        (self.wrist_x.len(), self.wrist_z.len())
    }

    /// Forget the trajectory (hand left the frame)
    pub fn clear(&mut self) {
        self.wrist_x.clear();
        self.wrist_z.clear();
    }
}

/// Population variance; 0 for an empty sequence
fn variance(values: impl Iterator<Item = f32> + Clone) -> f32 {
    let (sum, count) = values.clone().fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return 0.0;
    }
    let mean = sum / count as f32;
    values.map(|v| (v - mean) * (v - mean)).sum::<f32>() / count as f32
}
