//! Sign labels
//!
//! The closed set of gestures the recognizer can emit. "No gesture" is
//! `Option::None` and never crosses the JS boundary.

use std::fmt;
use std::str::FromStr;

use crate::error::RecognizerError;

/// Every label, in declaration order
pub const SIGN_LABELS: [SignLabel; 15] = [
    SignLabel::Hello,
    SignLabel::Stop,
    SignLabel::Yes,
    SignLabel::No,
    SignLabel::One,
    SignLabel::Peace,
    SignLabel::Ok,
    SignLabel::Pinch,
    SignLabel::ILoveYou,
    SignLabel::PointRight,
    SignLabel::PointLeft,
    SignLabel::ThankYou,
    SignLabel::Fist,
    SignLabel::Start,
    SignLabel::Wave,
];

/// Sign label enum for type-safe handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignLabel {
    /// Open palm, fingers spread.
    Hello,
    /// Open palm, fingers together.
    Stop,
    /// Closed fist.
    Yes,
    /// Index finger alone.
    No,
    One,
    /// Index and middle up.
    Peace,
    /// Thumb touching index, other three up.
    Ok,
    Pinch,
    /// Thumb, index and pinky out.
    ILoveYou,
    PointRight,
    PointLeft,
    /// Thumb pushed toward the camera with the index up.
    ThankYou,
    Fist,
    /// Fist pushed toward the camera.
    Start,
    /// Open palm swinging side to side.
    Wave,
}

impl SignLabel {
    /// Upper-case wire name sent to JavaScript
    pub fn as_str(&self) -> &'static str {
        match self {
            SignLabel::Hello => "HELLO",
            SignLabel::Stop => "STOP",
            SignLabel::Yes => "YES",
            SignLabel::No => "NO",
            SignLabel::One => "ONE",
            SignLabel::Peace => "PEACE",
            SignLabel::Ok => "OK",
            SignLabel::Pinch => "PINCH",
            SignLabel::ILoveYou => "ILOVEYOU",
            SignLabel::PointRight => "POINTRIGHT",
            SignLabel::PointLeft => "POINTLEFT",
            SignLabel::ThankYou => "THANKYOU",
            SignLabel::Fist => "FIST",
            SignLabel::Start => "START",
            SignLabel::Wave => "WAVE",
        }
    }
}

impl fmt::Display for SignLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignLabel {
    type Err = RecognizerError;

    /// Case-insensitive, matching how the practice page compares labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SIGN_LABELS
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RecognizerError::UnknownLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(SignLabel::Hello.as_str(), "HELLO");
        assert_eq!(SignLabel::ILoveYou.as_str(), "ILOVEYOU");
        assert_eq!(SignLabel::PointLeft.to_string(), "POINTLEFT");
        assert_eq!(SignLabel::Wave.to_string(), "WAVE");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("thankyou".parse::<SignLabel>(), Ok(SignLabel::ThankYou));
        assert_eq!(" Start ".parse::<SignLabel>(), Ok(SignLabel::Start));
        assert_eq!("PEACE".parse::<SignLabel>(), Ok(SignLabel::Peace));
    }

    #[test]
    fn test_none_is_not_a_label() {
        assert_eq!(
            "NONE".parse::<SignLabel>(),
            Err(RecognizerError::UnknownLabel("NONE".into()))
        );
    }

    #[test]
    fn test_wire_names_unique() {
        for (i, a) in SIGN_LABELS.iter().enumerate() {
            for b in &SIGN_LABELS[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
