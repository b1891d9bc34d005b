//! Geometric predicates for one hand frame
//!
//! Everything the rule table looks at is derived here, once per frame:
//! - finger up: tip at least 0.03 above its MCP joint (smaller y is higher)
//! - curl: tip-to-MCP distance (small = curled)
//! - thumb forward: thumb tip at least 0.05 closer to the camera than the wrist
//! - pinch: index tip to thumb tip distance
//! - spread: horizontal gap between index and pinky tips
//! - wrist tilt: which side of the wrist the index tip points to

use crate::bridge::{
    HandLandmarks, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP, PINKY_MCP, PINKY_TIP,
    RING_MCP, RING_TIP, THUMB_TIP, WRIST,
};

/// Tip must sit this far above its MCP joint to count as "up"
pub const FINGER_UP_MARGIN: f32 = 0.03;

/// Thumb tip must be this much closer than the wrist to count as "forward"
pub const THUMB_FORWARD_MARGIN: f32 = 0.05;

/// Horizontal wrist/index offset needed before a tilt is reported
pub const WRIST_TILT_MARGIN: f32 = 0.05;

/// All four curls under this make a fist
pub const FIST_CURL: f32 = 0.035;

/// The four long fingers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    pub fn tip(&self) -> usize {
        match self {
            Finger::Index => INDEX_TIP,
            Finger::Middle => MIDDLE_TIP,
            Finger::Ring => RING_TIP,
            Finger::Pinky => PINKY_TIP,
        }
    }

    pub fn mcp(&self) -> usize {
        match self {
            Finger::Index => INDEX_MCP,
            Finger::Middle => MIDDLE_MCP,
            Finger::Ring => RING_MCP,
            Finger::Pinky => PINKY_MCP,
        }
    }
}

/// Side the index finger points to, relative to the wrist
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WristTilt {
    Right,
    Left,
}

/// Per-frame geometric predicates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandFeatures {
    /// Up flags, indexed like `Finger::ALL`
    pub up: [bool; 4],
    /// Tip-to-MCP distances, indexed like `Finger::ALL`
    pub curl: [f32; 4],
    pub thumb_forward: bool,
    pub pinch_distance: f32,
    pub spread: f32,
    pub tilt: Option<WristTilt>,
}

impl HandFeatures {
    /// Derive every predicate from one hand's landmarks
    pub fn extract(hand: &HandLandmarks) -> Self {
        let mut up = [false; 4];
        let mut curl = [0.0; 4];
        for (i, finger) in Finger::ALL.iter().enumerate() {
            let tip = hand[finger.tip()];
            let mcp = hand[finger.mcp()];
            up[i] = tip.y < mcp.y - FINGER_UP_MARGIN;
            curl[i] = tip.distance(&mcp);
        }

        let wrist = hand[WRIST];
        let thumb_tip = hand[THUMB_TIP];
        let index_tip = hand[INDEX_TIP];
        let pinky_tip = hand[PINKY_TIP];

        let tilt = if wrist.x < index_tip.x - WRIST_TILT_MARGIN {
            Some(WristTilt::Right)
        } else if wrist.x > index_tip.x + WRIST_TILT_MARGIN {
            Some(WristTilt::Left)
        } else {
            None
        };

        Self {
            up,
            curl,
            thumb_forward: thumb_tip.z < wrist.z - THUMB_FORWARD_MARGIN,
            pinch_distance: index_tip.distance(&thumb_tip),
            spread: (index_tip.x - pinky_tip.x).abs(),
            tilt,
        }
    }

    pub fn is_up(&self, finger: Finger) -> bool {
        self.up[finger as usize]
    }

    pub fn curl_of(&self, finger: Finger) -> f32 {
        self.curl[finger as usize]
    }

    /// Open palm: all four long fingers up
    pub fn all_fingers_up(&self) -> bool {
        self.up.iter().all(|&up| up)
    }

    /// Index up, middle/ring/pinky not
    pub fn index_only(&self) -> bool {
        self.is_up(Finger::Index)
            && !self.is_up(Finger::Middle)
            && !self.is_up(Finger::Ring)
            && !self.is_up(Finger::Pinky)
    }

    /// Every listed finger curled tighter than `limit`
    pub fn curled_below(&self, fingers: &[Finger], limit: f32) -> bool {
        fingers.iter().all(|&finger| self.curl_of(finger) < limit)
    }

    /// All four long fingers folded onto their knuckles
    pub fn is_fist(&self) -> bool {
        self.curled_below(&Finger::ALL, FIST_CURL)
    }
}
