use std::fmt;
use std::path::Path;

use anyhow::Context;
use lib_game::{HandLandmarks, Landmark};
use log::info;
use macroquad::prelude::*;

/// Something that produces one hand per logic tick.
pub trait HandTracker {
    /// Called every rendered frame, even when no tick happens.
    /// Sources reading window input latch their key presses here.
    fn poll(&mut self) {}

    /// `Ok(None)` means no hand was seen this frame.
    fn next_frame(&mut self) -> Result<Option<HandLandmarks>, CaptureError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    /// The recording ran out.
    Exhausted { frames: usize },
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Exhausted { frames } => {
                write!(f, "hand recording exhausted after {frames} frames")
            }
        }
    }
}

impl std::error::Error for CaptureError {}

/// Turns the mouse into a hand: the cursor is the index fingertip,
/// holding the right button clenches a fist.
pub struct MouseHand {
    hidden: bool,
}

impl MouseHand {
    pub fn new() -> Self {
        Self { hidden: false }
    }
}

impl HandTracker for MouseHand {
    fn poll(&mut self) {
        if is_key_pressed(KeyCode::H) {
            self.hidden = !self.hidden;
            info!("Mouse hand hidden: {}", self.hidden);
        }
    }

    fn next_frame(&mut self) -> Result<Option<HandLandmarks>, CaptureError> {
        if self.hidden {
            return Ok(None);
        }

        let (mx, my) = mouse_position();
        let tip = Landmark::new(mx / screen_width(), my / screen_height());
        let hand = if is_mouse_button_down(MouseButton::Right) {
            HandLandmarks::fist_at(tip)
        } else {
            HandLandmarks::pointing_at(tip)
        };

        Ok(Some(hand))
    }
}

/// Plays back a recorded list of frames.
pub struct ReplayHand {
    frames: Vec<Option<HandLandmarks>>,
    cursor: usize,
    looping: bool,
}

impl ReplayHand {
    pub fn from_ron(src: &str, looping: bool) -> anyhow::Result<Self> {
        let frames = ron::from_str(src).context("parsing hand recording")?;

        Ok(Self {
            frames,
            cursor: 0,
            looping,
        })
    }

    pub fn load(path: impl AsRef<Path>, looping: bool) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("reading hand recording {path:?}"))?;
        let replay = Self::from_ron(&src, looping).with_context(|| format!("loading {path:?}"))?;

        info!("Loaded {} recorded frames from {path:?}", replay.frames.len());
        Ok(replay)
    }
}

impl HandTracker for ReplayHand {
    fn next_frame(&mut self) -> Result<Option<HandLandmarks>, CaptureError> {
        if self.cursor >= self.frames.len() && self.looping {
            self.cursor = 0;
        }

        let frame = self
            .frames
            .get(self.cursor)
            .copied()
            .ok_or(CaptureError::Exhausted {
                frames: self.frames.len(),
            })?;
        self.cursor += 1;

        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording(frames: &[Option<HandLandmarks>]) -> String {
        ron::to_string(frames).unwrap()
    }

    #[test]
    fn test_replay_in_order() {
        let hand = HandLandmarks::pointing_at(Landmark::new(0.5, 0.5));
        let fist = HandLandmarks::fist_at(Landmark::new(0.2, 0.6));
        let src = recording(&[Some(hand), None, Some(fist)]);
        let mut replay = ReplayHand::from_ron(&src, false).unwrap();

        assert_eq!(replay.next_frame(), Ok(Some(hand)));
        assert_eq!(replay.next_frame(), Ok(None));
        assert_eq!(replay.next_frame(), Ok(Some(fist)));
        assert_eq!(
            replay.next_frame(),
            Err(CaptureError::Exhausted { frames: 3 })
        );
        assert_eq!(
            replay.next_frame(),
            Err(CaptureError::Exhausted { frames: 3 })
        );
    }

    #[test]
    fn test_replay_loops() {
        let hand = HandLandmarks::pointing_at(Landmark::new(0.3, 0.4));
        let mut replay = ReplayHand::from_ron(&recording(&[None, Some(hand)]), true).unwrap();

        let frames: Vec<_> = (0..5).map(|_| replay.next_frame()).collect();

        assert_eq!(
            frames,
            [Ok(None), Ok(Some(hand)), Ok(None), Ok(Some(hand)), Ok(None)]
        );
    }

    #[test]
    fn test_empty_loop_is_exhausted() {
        let mut replay = ReplayHand::from_ron("[]", true).unwrap();

        assert_eq!(
            replay.next_frame(),
            Err(CaptureError::Exhausted { frames: 0 })
        );
    }

    #[test]
    fn test_short_hand_is_rejected() {
        let src = "[Some([(x: 0.5, y: 0.5)])]";

        assert!(ReplayHand::from_ron(src, false).is_err());
    }
}
