//! Recognizer session - per-frame pipeline
//!
//! One `RecognizerSession` per camera session. It owns every buffer that
//! spans frames (candidate window, wrist history, cooldown guard) and is
//! driven by a single serialized stream of `SessionEvent`s:
//!
//! 1. no hand → wipe all buffers, done
//! 2. classify the frame
//! 3. update wrist motion
//! 4. fist + forward push → START
//! 5. open palm + oscillating wrist → WAVE (wins over everything)
//! 6. vote
//! 7. on acceptance: arm cooldown, clear the vote window, notify the sink once
//!
//! Cooldown expiry is an event on the same path as frames. Frames carry a
//! timestamp, and a frame that arrives after the cooldown ran out first
//! replays the expiry, exactly as if a timer had fired between the two
//! frames.

use log::{debug, info};

use crate::bridge::{FrameObservation, HandLandmarks, WRIST};
use crate::classifier::{evaluate, HandFeatures, SignLabel};
use crate::config::RecognizerConfig;
use crate::motion::MotionTracker;
use crate::stabilizer::{CooldownGuard, TemporalStabilizer};

/// Everything a session reacts to
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// One tracker callback
    Frame {
        observation: FrameObservation,
        timestamp_ms: f64,
    },
    /// The cooldown timer fired
    CooldownExpired,
}

/// Receives accepted labels
pub trait RecognitionSink {
    fn on_recognized(&mut self, label: SignLabel);
}

impl<F: FnMut(SignLabel)> RecognitionSink for F {
    fn on_recognized(&mut self, label: SignLabel) {
        self(label)
    }
}

/// Gesture recognition state for one tracked hand
pub struct RecognizerSession {
    config: RecognizerConfig,
    stabilizer: TemporalStabilizer,
    motion: MotionTracker,
    cooldown: CooldownGuard,
    /// Previous frame's candidate, only used to log changes
    last_candidate: Option<SignLabel>,
    closed: bool,
}

impl RecognizerSession {
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            stabilizer: TemporalStabilizer::new(config.buffer_size, config.stable_threshold),
            motion: MotionTracker::new(&config),
            cooldown: CooldownGuard::new(config.cooldown_ms),
            last_candidate: None,
            closed: false,
            config,
        }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Feed one event. Returns the accepted label, if this event caused one.
    pub fn handle<S>(&mut self, event: SessionEvent, sink: &mut S) -> Option<SignLabel>
    where
        S: RecognitionSink + ?Sized,
    {
        if self.closed {
            return None;
        }

        match event {
            SessionEvent::CooldownExpired => {
                if self.cooldown.is_active() {
                    debug!("Cooldown released");
                }
                self.cooldown.expire();
                None
            }
            SessionEvent::Frame {
                observation,
                timestamp_ms,
            } => {
                if self.cooldown.is_due(timestamp_ms) {
                    self.handle(SessionEvent::CooldownExpired, sink);
                }
                match observation {
                    Some(hand) => self.process_hand(&hand, timestamp_ms, sink),
                    None => {
                        self.clear_buffers();
                        None
                    }
                }
            }
        }
    }

    /// Shorthand for `handle(SessionEvent::Frame { .. })`
    pub fn push_frame<S>(
        &mut self,
        observation: FrameObservation,
        timestamp_ms: f64,
        sink: &mut S,
    ) -> Option<SignLabel>
    where
        S: RecognitionSink + ?Sized,
    {
        self.handle(
            SessionEvent::Frame {
                observation,
                timestamp_ms,
            },
            sink,
        )
    }

    fn process_hand<S>(
        &mut self,
        hand: &HandLandmarks,
        timestamp_ms: f64,
        sink: &mut S,
    ) -> Option<SignLabel>
    where
        S: RecognitionSink + ?Sized,
    {
        let features = HandFeatures::extract(hand);
        let mut candidate = evaluate(&features).map(|(_, label)| label);

        let signals = self.motion.update(hand[WRIST]);

        // Only the fist label itself (YES claims the fist shape) turns into START
        if matches!(candidate, Some(SignLabel::Yes | SignLabel::Fist)) && signals.forward_motion {
            candidate = Some(SignLabel::Start);
        }
        if features.all_fingers_up() && signals.oscillating {
            candidate = Some(SignLabel::Wave);
        }

        if candidate != self.last_candidate {
            debug!(
                "Candidate {:?} -> {:?} (var_x={:.4}, dz={:.3})",
                self.last_candidate, candidate, signals.variance_x, signals.forward_delta
            );
            self.last_candidate = candidate;
        }

        let accepted = self.stabilizer.observe(candidate, &self.cooldown)?;

        self.cooldown.accept(accepted, timestamp_ms);
        self.stabilizer.clear();
        debug!("Accepted {} at {:.0} ms", accepted, timestamp_ms);
        sink.on_recognized(accepted);

        Some(accepted)
    }

    fn clear_buffers(&mut self) {
        self.stabilizer.clear();
        self.motion.clear();
        self.last_candidate = None;
    }

    /// Start over as if freshly created; the session stays open
    pub fn reset(&mut self) {
        self.clear_buffers();
        self.cooldown.reset();
        info!("Recognizer session reset");
    }

    /// Teardown: stop accepting frames and drop any pending cooldown
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.cooldown.expire();
        self.clear_buffers();
        info!("Recognizer session closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Most recently accepted label
    pub fn last_label(&self) -> Option<SignLabel> {
        self.cooldown.last_accepted()
    }

    /// Whether the cooldown is armed.
    ///
    /// Expiry is only applied when the next event arrives, so while frames
    /// are paused this can stay true past `cooldown_ms`.
    pub fn is_cooling_down(&self) -> bool {
        self.cooldown.is_active()
    }

    /// Frames currently in the vote window
    pub fn candidate_len(&self) -> usize {
        self.stabilizer.len()
    }

    /// (wrist x samples, wrist z samples)
    pub fn wrist_history_len(&self) -> (usize, usize) {
        self.motion.history_len()
    }

    /// Current vote leader and its count
    pub fn leading_candidate(&self) -> Option<(SignLabel, usize)> {
        self.stabilizer.tally()
    }
}

impl Default for RecognizerSession {
    fn default() -> Self {
        Self::new(RecognizerConfig::default())
    }
}
