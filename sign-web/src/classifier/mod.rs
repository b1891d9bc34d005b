//! Classifier module - rule-based hand sign classification
//!
//! Turns one frame of hand landmarks into a candidate label. Stateless:
//! everything that spans frames lives in `motion` and `stabilizer`.

mod buffer;
mod features;
mod label;
mod rules;

pub use buffer::SlidingWindow;
pub use features::{Finger, HandFeatures, WristTilt};
pub use label::{SignLabel, SIGN_LABELS};
pub use rules::{classify, evaluate, Rule, RULES};
