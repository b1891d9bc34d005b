//! Sign Web - Hand Sign Recognition
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;
mod classifier;
mod config;
mod error;
mod motion;
mod session;
mod stabilizer;

#[cfg(test)]
mod test_support;

use wasm_bindgen::prelude::*;

// Re-export for JS and native hosts
pub use bridge::*;
pub use classifier::{
    classify, evaluate, Finger, HandFeatures, Rule, SignLabel, SlidingWindow, WristTilt, RULES,
    SIGN_LABELS,
};
pub use config::RecognizerConfig;
pub use error::RecognizerError;
pub use motion::{MotionSignals, MotionTracker};
pub use session::{RecognitionSink, RecognizerSession, SessionEvent};
pub use stabilizer::{CooldownGuard, TemporalStabilizer};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console.
///
/// @param {string} level - "trace", "debug", "info", "warn" or "error"
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = match level.to_ascii_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("Sign recognizer logging at {}", log_level);
}

/// @returns {string} Crate version
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// All labels the recognizer can emit.
#[wasm_bindgen(js_name = supportedLabels)]
pub fn supported_labels() -> Vec<JsValue> {
    SIGN_LABELS
        .iter()
        .map(|label| JsValue::from_str(label.as_str()))
        .collect()
}
