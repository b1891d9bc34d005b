//! Ordered gesture rules
//!
//! Rules are checked top to bottom and the first match wins. Several rules
//! share preconditions, so the order IS the behavior: moving a rule changes
//! which label overlapping hands receive.
//!
//! Four entries are redundant. Strict ONE, POINT and FIST can never fire
//! because an earlier rule already claims every hand they accept; the first
//! NO rule is covered by the plain "index only" NO right after it. They stay
//! in the table so it reads one-to-one with the gesture list; `tests` checks
//! that dropping them changes no output.

use super::features::{Finger, HandFeatures, WristTilt, FIST_CURL};
use super::label::SignLabel;
use crate::bridge::FrameObservation;

/// HELLO needs index and pinky tips further apart than this; STOP does not
pub const OPEN_PALM_SPREAD: f32 = 0.07;

/// Looser curl limit used by ONE and PINCH
pub const LOOSE_CURL: f32 = 0.04;

/// NO (and strict ONE) want the thumb well away from the index tip
pub const THUMB_CLEAR_PINCH: f32 = 0.06;

/// OK: thumb touching the index tip
pub const OK_PINCH: f32 = 0.03;

/// PINCH: thumb and index closed tighter than OK
pub const TIGHT_PINCH: f32 = 0.02;

/// ILOVEYOU: thumb out to the side
pub const ILOVEYOU_PINCH: f32 = 0.05;

const OTHER_THREE: [Finger; 3] = [Finger::Middle, Finger::Ring, Finger::Pinky];

/// One entry of the rule table
pub struct Rule {
    pub name: &'static str,
    /// Returns the label when the rule matches
    pub eval: fn(&HandFeatures) -> Option<SignLabel>,
    /// Removing this entry changes no output
    pub redundant: bool,
}

/// The rule table, in evaluation order
#[rustfmt::skip]
pub static RULES: [Rule; 14] = [
    Rule { name: "hello", eval: hello, redundant: false },
    Rule { name: "stop", eval: stop, redundant: false },
    Rule { name: "yes", eval: yes, redundant: false },
    Rule { name: "no", eval: no_thumb_clear, redundant: true },
    Rule { name: "no-fallback", eval: no_fallback, redundant: false },
    Rule { name: "one", eval: one, redundant: false },
    Rule { name: "one-strict", eval: one_strict, redundant: true },
    Rule { name: "peace", eval: peace, redundant: false },
    Rule { name: "ok", eval: ok, redundant: false },
    Rule { name: "pinch", eval: pinch, redundant: false },
    Rule { name: "iloveyou", eval: i_love_you, redundant: false },
    Rule { name: "point", eval: point, redundant: true },
    Rule { name: "thankyou", eval: thank_you, redundant: false },
    Rule { name: "fist", eval: fist, redundant: true },
];

fn when(condition: bool, label: SignLabel) -> Option<SignLabel> {
    condition.then_some(label)
}

fn hello(f: &HandFeatures) -> Option<SignLabel> {
    when(f.all_fingers_up() && f.spread > OPEN_PALM_SPREAD, SignLabel::Hello)
}

fn stop(f: &HandFeatures) -> Option<SignLabel> {
    when(f.all_fingers_up() && f.spread <= OPEN_PALM_SPREAD, SignLabel::Stop)
}

fn yes(f: &HandFeatures) -> Option<SignLabel> {
    when(f.curled_below(&Finger::ALL, FIST_CURL), SignLabel::Yes)
}

fn no_thumb_clear(f: &HandFeatures) -> Option<SignLabel> {
    when(f.index_only() && f.pinch_distance > THUMB_CLEAR_PINCH, SignLabel::No)
}

fn no_fallback(f: &HandFeatures) -> Option<SignLabel> {
    when(f.index_only(), SignLabel::No)
}

fn one(f: &HandFeatures) -> Option<SignLabel> {
    when(
        f.is_up(Finger::Index) && f.curled_below(&OTHER_THREE, LOOSE_CURL),
        SignLabel::One,
    )
}

fn one_strict(f: &HandFeatures) -> Option<SignLabel> {
    when(
        f.is_up(Finger::Index)
            && f.curled_below(&OTHER_THREE, LOOSE_CURL)
            && f.pinch_distance > THUMB_CLEAR_PINCH,
        SignLabel::One,
    )
}

fn peace(f: &HandFeatures) -> Option<SignLabel> {
    when(
        f.is_up(Finger::Index)
            && f.is_up(Finger::Middle)
            && !f.is_up(Finger::Ring)
            && !f.is_up(Finger::Pinky),
        SignLabel::Peace,
    )
}

fn ok(f: &HandFeatures) -> Option<SignLabel> {
    when(
        f.pinch_distance < OK_PINCH && OTHER_THREE.iter().all(|&finger| f.is_up(finger)),
        SignLabel::Ok,
    )
}

fn pinch(f: &HandFeatures) -> Option<SignLabel> {
    when(
        f.pinch_distance < TIGHT_PINCH
            && f.curled_below(&[Finger::Middle, Finger::Ring], LOOSE_CURL),
        SignLabel::Pinch,
    )
}

fn i_love_you(f: &HandFeatures) -> Option<SignLabel> {
    when(
        f.pinch_distance > ILOVEYOU_PINCH
            && f.is_up(Finger::Index)
            && f.is_up(Finger::Pinky)
            && !f.is_up(Finger::Middle)
            && !f.is_up(Finger::Ring),
        SignLabel::ILoveYou,
    )
}

fn point(f: &HandFeatures) -> Option<SignLabel> {
    if !f.index_only() {
        return None;
    }
    match f.tilt? {
        WristTilt::Right => Some(SignLabel::PointRight),
        WristTilt::Left => Some(SignLabel::PointLeft),
    }
}

fn thank_you(f: &HandFeatures) -> Option<SignLabel> {
    when(f.thumb_forward && f.is_up(Finger::Index), SignLabel::ThankYou)
}

fn fist(f: &HandFeatures) -> Option<SignLabel> {
    when(f.is_fist(), SignLabel::Fist)
}

/// First matching rule as `(table index, label)`
pub fn evaluate(features: &HandFeatures) -> Option<(usize, SignLabel)> {
    RULES
        .iter()
        .enumerate()
        .find_map(|(i, rule)| (rule.eval)(features).map(|label| (i, label)))
}

/// Classify one frame. "No hand" and "no rule matched" are both `None`.
pub fn classify(frame: &FrameObservation) -> Option<SignLabel> {
    let hand = frame.as_ref()?;
    evaluate(&HandFeatures::extract(hand)).map(|(_, label)| label)
}
