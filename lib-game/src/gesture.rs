use macroquad::math::{IVec2, Vec2, ivec2};
use serde::{Deserialize, Serialize};

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// The non-thumb fingertips. The landmark two indices below each
/// of them is the middle knuckle of the same finger.
pub const FINGER_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Largest horizontal tip-to-knuckle offset (normalized units)
/// for which the index finger still counts as pointing up.
pub const POINTING_MAX_DX: f32 = 0.1;

/// One landmark in normalized image coordinates. `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The 21 keypoints of a single tracked hand, in the usual
/// wrist / thumb / index / middle / ring / pinky order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandLandmarks(pub [Landmark; LANDMARK_COUNT]);

impl HandLandmarks {
    /// A synthetic hand with the index finger extended straight up
    /// and the other three fingers curled. The index tip is put at `tip`.
    pub fn pointing_at(tip: Landmark) -> Self {
        let mut hand = Self::curled_around(tip);
        let lm = &mut hand.0;

        lm[INDEX_MCP] = Landmark::new(tip.x, tip.y + 0.12);
        lm[INDEX_PIP] = Landmark::new(tip.x, tip.y + 0.08);
        lm[INDEX_DIP] = Landmark::new(tip.x, tip.y + 0.04);
        lm[INDEX_TIP] = tip;

        hand
    }

    /// A synthetic closed fist. Every fingertip sits below its middle
    /// knuckle. `tip` is where the index tip ends up.
    pub fn fist_at(tip: Landmark) -> Self {
        let mut hand = Self::curled_around(tip);
        let lm = &mut hand.0;

        lm[INDEX_MCP] = Landmark::new(tip.x, tip.y - 0.06);
        lm[INDEX_PIP] = Landmark::new(tip.x, tip.y - 0.04);
        lm[INDEX_DIP] = Landmark::new(tip.x, tip.y - 0.01);
        lm[INDEX_TIP] = tip;

        hand
    }

    fn curled_around(anchor: Landmark) -> Self {
        let mut lm = [Landmark::new(anchor.x, anchor.y + 0.2); LANDMARK_COUNT];
        lm[WRIST] = Landmark::new(anchor.x, anchor.y + 0.25);

        for (finger, base) in [(1usize, -0.06f32), (9, 0.02), (13, 0.04), (17, 0.06)] {
            for joint in 0..4 {
                let x = anchor.x + base;
                let y = anchor.y + 0.1 - joint as f32 * 0.02;
                lm[finger + joint] = Landmark::new(x, y);
            }
        }

        // Curl: the tips drop back below the middle knuckles.
        for tip in [MIDDLE_TIP, RING_TIP, PINKY_TIP] {
            lm[tip].y = lm[tip - 2].y + 0.03;
        }
        lm[THUMB_TIP].x -= 0.02;

        Self(lm)
    }

    pub fn index_tip(&self) -> Landmark {
        self.0[INDEX_TIP]
    }

    /// Index finger extended roughly vertically.
    pub fn is_pointing(&self) -> bool {
        let tip = self.0[INDEX_TIP];
        let pip = self.0[INDEX_PIP];

        tip.y < pip.y && (tip.x - pip.x).abs() < POINTING_MAX_DX
    }

    /// All four non-thumb fingers curled down.
    pub fn is_fist(&self) -> bool {
        FINGER_TIPS
            .iter()
            .all(|&tip| self.0[tip].y > self.0[tip - 2].y)
    }
}

/// What a single frame of hand tracking means for the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandSample {
    pub pointing: bool,
    pub fist_closed: bool,
    /// Index fingertip in screen pixels. Only set while pointing.
    pub raw_tip: Option<IVec2>,
}

impl HandSample {
    pub const NO_HAND: Self = Self {
        pointing: false,
        fist_closed: false,
        raw_tip: None,
    };

    pub fn classify(hand: Option<&HandLandmarks>) -> Self {
        let Some(hand) = hand else {
            return Self::NO_HAND;
        };

        let pointing = hand.is_pointing();
        let fist_closed = hand.is_fist();
        let raw_tip = pointing.then(|| to_screen(hand.index_tip()));

        Self {
            pointing,
            fist_closed,
            raw_tip,
        }
    }

    pub fn raw_tip_f32(&self) -> Option<Vec2> {
        self.raw_tip.map(|tip| tip.as_vec2())
    }
}

/// Rescales a normalized point into screen pixels, truncating
/// towards zero.
pub fn to_screen(lm: Landmark) -> IVec2 {
    ivec2((lm.x * SCREEN_WIDTH) as i32, (lm.y * SCREEN_HEIGHT) as i32)
}

/// The inverse of [to_screen], used by synthetic hand sources.
pub fn from_screen(pos: Vec2) -> Landmark {
    Landmark::new(pos.x / SCREEN_WIDTH, pos.y / SCREEN_HEIGHT)
}
