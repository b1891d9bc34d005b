//! SignRecognizer - the JS-facing recognizer object
//!
//! Wraps one `RecognizerSession`. JavaScript pushes every MediaPipe Hands
//! result into it and gets `onRecognized(label)` called back once per
//! accepted sign.

use wasm_bindgen::prelude::*;

use super::hand_landmarks::{decode_first_hand, FrameObservation};
use crate::classifier::SignLabel;
use crate::config::RecognizerConfig;
use crate::error::RecognizerError;
use crate::session::{RecognizerSession, SessionEvent};

/// Debounced sign recognizer for one camera session
#[wasm_bindgen]
pub struct SignRecognizer {
    session: RecognizerSession,
    on_recognized: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl SignRecognizer {
    /// Create a recognizer.
    ///
    /// @param {object | undefined} config - Optional overrides, e.g.
    ///   `{ bufferSize: 12, stableThreshold: 7, cooldownMs: 1800 }`
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SignRecognizer, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            RecognizerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| RecognizerError::InvalidConfig(e.to_string()))?
        };
        config.validate()?;

        log::info!(
            "Sign recognizer ready (window {}, threshold {}, cooldown {} ms)",
            config.buffer_size,
            config.stable_threshold,
            config.cooldown_ms
        );

        Ok(SignRecognizer {
            session: RecognizerSession::new(config),
            on_recognized: None,
        })
    }

    /// Register the callback that receives each accepted label string.
    #[wasm_bindgen(js_name = onRecognized)]
    pub fn set_on_recognized(&mut self, callback: js_sys::Function) {
        self.on_recognized = Some(callback);
    }

    /// Feed one MediaPipe Hands result.
    ///
    /// @param {Float32Array} flat_data - numHands × 21 × (x, y, z)
    /// @param {number} num_hands - 0 when no hand was detected
    /// @param {number | undefined} timestamp_ms - Frame time; defaults to now,
    ///   as does NaN or ±Infinity
    /// @returns {string | undefined} The label accepted on this frame
    #[wasm_bindgen(js_name = pushFrame)]
    pub fn push_frame(
        &mut self,
        flat_data: &[f32],
        num_hands: usize,
        timestamp_ms: Option<f64>,
    ) -> Option<String> {
        let observation = match decode_first_hand(flat_data, num_hands) {
            Ok(observation) => observation,
            Err(err) => {
                log::warn!("{}; treating frame as no hand", err);
                None
            }
        };
        self.dispatch(observation, timestamp_ms)
    }

    /// Feed a frame in which no hand was detected.
    #[wasm_bindgen(js_name = pushNoHand)]
    pub fn push_no_hand(&mut self, timestamp_ms: Option<f64>) {
        self.dispatch(None, timestamp_ms);
    }

    /// Release the cooldown now (for hosts that run their own timer).
    #[wasm_bindgen(js_name = expireCooldown)]
    pub fn expire_cooldown(&mut self) {
        let mut ignore = |_: SignLabel| {};
        self.session.handle(SessionEvent::CooldownExpired, &mut ignore);
    }

    /// Most recently accepted label, if any.
    #[wasm_bindgen(js_name = lastLabel)]
    pub fn last_label(&self) -> Option<String> {
        self.session.last_label().map(|label| label.as_str().to_string())
    }

    /// Expiry is applied on the next pushed frame, so this may stay true past
    /// the cooldown while no frames arrive.
    #[wasm_bindgen(js_name = isCoolingDown)]
    pub fn is_cooling_down(&self) -> bool {
        self.session.is_cooling_down()
    }

    /// Frames currently in the vote window (for debug overlays).
    #[wasm_bindgen(js_name = bufferedFrames)]
    pub fn buffered_frames(&self) -> usize {
        self.session.candidate_len()
    }

    /// The active configuration as a plain JS object.
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.session.config()).map_err(JsValue::from)
    }

    /// Clear all buffers and forget the last accepted label.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Stop accepting frames. Call when the camera stops.
    pub fn close(&mut self) {
        self.session.close();
        self.on_recognized = None;
    }
}

impl SignRecognizer {
    fn dispatch(
        &mut self,
        observation: FrameObservation,
        timestamp_ms: Option<f64>,
    ) -> Option<String> {
        let timestamp_ms = timestamp_ms
            .filter(|t| t.is_finite())
            .unwrap_or_else(now_ms);
        let callback = self.on_recognized.as_ref();
        let mut notify = |label: SignLabel| {
            if let Some(callback) = callback {
                let this = JsValue::NULL;
                if let Err(err) = callback.call1(&this, &JsValue::from_str(label.as_str())) {
                    log::warn!("onRecognized callback threw: {:?}", err);
                }
            }
        };

        self.session
            .push_frame(observation, timestamp_ms, &mut notify)
            .map(|label| label.as_str().to_string())
    }
}

/// Monotonic page clock when available, wall clock otherwise
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}
