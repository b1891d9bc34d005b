//! Hand landmark frames from MediaPipe Hands
//!
//! One frame is either "no hand" or the 21 landmarks of the first detected
//! hand. JavaScript hands us a flat Float32Array (hands × 21 × xyz); anything
//! past the first hand is dropped.

use crate::error::RecognizerError;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Landmarks per hand
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Floats per hand in the flat JS array
pub const FLOATS_PER_HAND: usize = HAND_LANDMARK_COUNT * 3;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single normalized landmark: x/y in image space (0-1), z relative depth
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    /// Smaller is closer to the camera
    pub z: f32,
}

impl HandLandmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in all three axes
    pub fn distance(&self, other: &HandLandmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// The 21 landmarks of one hand, in MediaPipe order
pub type HandLandmarks = [HandLandmark; HAND_LANDMARK_COUNT];

/// One tracker observation: `None` when no hand is in view
pub type FrameObservation = Option<HandLandmarks>;

// ============================================================================
// FLAT ARRAY DECODING
// ============================================================================

/// Decode the first hand out of a flat `[x, y, z, x, y, z, ...]` array.
///
/// `num_hands == 0` is a clean "no hand" frame. A non-zero hand count with
/// fewer than 63 floats is malformed.
pub fn decode_first_hand(
    flat_data: &[f32],
    num_hands: usize,
) -> Result<FrameObservation, RecognizerError> {
    if num_hands == 0 {
        return Ok(None);
    }

    if flat_data.len() < FLOATS_PER_HAND {
        return Err(RecognizerError::InvalidLandmarkData {
            len: flat_data.len(),
            expected: FLOATS_PER_HAND,
        });
    }

    let mut landmarks = [HandLandmark::default(); HAND_LANDMARK_COUNT];
    for (i, chunk) in flat_data[..FLOATS_PER_HAND].chunks_exact(3).enumerate() {
        landmarks[i] = HandLandmark::new(chunk[0], chunk[1], chunk[2]);
    }

    Ok(Some(landmarks))
}
