//! Errors raised at the JS boundary
//!
//! The recognition pipeline itself never fails: bad geometry is a `None`
//! candidate. These errors only cover decoding input from JavaScript.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while talking to the host page
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecognizerError {
    #[error("invalid landmark data length: {len} (expected at least {expected})")]
    InvalidLandmarkData { len: usize, expected: usize },

    #[error("invalid recognizer config: {0}")]
    InvalidConfig(String),

    #[error("unknown sign label: {0:?}")]
    UnknownLabel(String),
}

impl From<RecognizerError> for JsValue {
    fn from(err: RecognizerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
