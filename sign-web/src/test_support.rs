//! Synthetic hands for unit tests

use crate::bridge::{
    HandLandmark, HandLandmarks, HAND_LANDMARK_COUNT, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP,
    WRIST,
};
use crate::classifier::Finger;

const MCP_Y: f32 = 0.6;
const NEUTRAL_TIP_DROP: f32 = 0.06;
const RAISED_TIP: f32 = 0.1;
const CURLED_TIP: f32 = 0.01;

fn mcp_x(finger: Finger) -> f32 {
    match finger {
        Finger::Index => 0.44,
        Finger::Middle => 0.48,
        Finger::Ring => 0.52,
        Finger::Pinky => 0.56,
    }
}

/// Builds a right hand held up in front of the camera.
///
/// By default every long finger is half bent (tip 0.06 below the knuckle):
/// not up, not curled, so no rule fires.
#[derive(Clone, Debug)]
pub(crate) struct HandBuilder {
    landmarks: HandLandmarks,
}

impl HandBuilder {
    pub(crate) fn new() -> Self {
        let mut landmarks = [HandLandmark::default(); HAND_LANDMARK_COUNT];
        landmarks[WRIST] = HandLandmark::new(0.5, 0.8, 0.0);
        landmarks[THUMB_CMC] = HandLandmark::new(0.44, 0.76, 0.0);
        landmarks[THUMB_MCP] = HandLandmark::new(0.40, 0.72, 0.0);
        landmarks[THUMB_IP] = HandLandmark::new(0.38, 0.69, 0.0);
        landmarks[THUMB_TIP] = HandLandmark::new(0.36, 0.66, 0.0);

        for finger in Finger::ALL {
            let x = mcp_x(finger);
            let mcp = finger.mcp();
            landmarks[mcp] = HandLandmark::new(x, MCP_Y, 0.0);
            // PIP and DIP sit between the knuckle and the tip
            landmarks[mcp + 1] = HandLandmark::new(x, MCP_Y + 0.02, 0.0);
            landmarks[mcp + 2] = HandLandmark::new(x, MCP_Y + 0.04, 0.0);
        }

        let mut builder = Self { landmarks };
        for finger in Finger::ALL {
            builder = builder.tip_offset(finger, 0.0, NEUTRAL_TIP_DROP);
        }
        builder
    }

    /// All four fingers straight up, index and pinky 0.12 apart
    pub(crate) fn open_palm() -> Self {
        Finger::ALL
            .iter()
            .fold(Self::new(), |builder, &finger| builder.finger_up(finger))
    }

    pub(crate) fn fist() -> Self {
        Finger::ALL
            .iter()
            .fold(Self::new(), |builder, &finger| builder.finger_curled(finger))
    }

    pub(crate) fn finger_up(self, finger: Finger) -> Self {
        self.tip_offset(finger, 0.0, -RAISED_TIP)
    }

    pub(crate) fn finger_curled(self, finger: Finger) -> Self {
        self.tip_offset(finger, 0.0, CURLED_TIP)
    }

    /// Place a fingertip relative to its own knuckle
    pub(crate) fn tip_offset(mut self, finger: Finger, dx: f32, dy: f32) -> Self {
        let mcp = self.landmarks[finger.mcp()];
        self.landmarks[finger.tip()] = HandLandmark::new(mcp.x + dx, mcp.y + dy, mcp.z);
        self
    }

    pub(crate) fn thumb_tip(mut self, x: f32, y: f32, z: f32) -> Self {
        self.landmarks[THUMB_TIP] = HandLandmark::new(x, y, z);
        self
    }

    /// Thumb tip 0.1 closer to the camera than the wrist
    pub(crate) fn thumb_forward(mut self) -> Self {
        self.landmarks[THUMB_TIP].z = self.landmarks[WRIST].z - 0.1;
        self
    }

    /// Put the thumb tip right next to the index tip
    pub(crate) fn thumb_on_index(self, gap: f32) -> Self {
        let tip = self.landmarks[Finger::Index.tip()];
        self.thumb_tip(tip.x + gap, tip.y, tip.z)
    }

    /// Move the whole hand
    pub(crate) fn translate(mut self, dx: f32, dy: f32, dz: f32) -> Self {
        for landmark in self.landmarks.iter_mut() {
            landmark.x += dx;
            landmark.y += dy;
            landmark.z += dz;
        }
        self
    }

    pub(crate) fn build(&self) -> HandLandmarks {
        self.landmarks
    }
}
