use macroquad::math::{Vec2, vec2};

use crate::{HandSample, SCREEN_HEIGHT, SCREEN_WIDTH, config};

/// The on-screen catcher. It follows the fingertip horizontally
/// with some lag and stays on a fixed line unless the player
/// flicks the finger up to jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    pub jump_active: bool,
    pub jump_velocity: f32,
    pub last_jump_frame: i64,
    cfg: config::sections::Pointer,
}

impl Pointer {
    pub fn new(cfg: config::sections::Pointer) -> Self {
        Self {
            x: SCREEN_WIDTH / 2.0,
            y: SCREEN_HEIGHT * cfg.baseline,
            jump_active: false,
            jump_velocity: 0.0,
            last_jump_frame: -999,
            cfg,
        }
    }

    pub fn baseline(&self) -> f32 {
        SCREEN_HEIGHT * self.cfg.baseline
    }

    pub fn pos(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    pub fn advance(&mut self, sample: &HandSample, frame_count: u64) -> Vec2 {
        let frame = frame_count as i64;
        let tip = sample.raw_tip_f32();

        if let Some(tip) = tip {
            self.x += (tip.x - self.x) * self.cfg.smoothing;
        }

        let wants_jump = tip.is_some_and(|tip| tip.y < SCREEN_HEIGHT * self.cfg.jump_zone);
        let cooled_down = frame - self.last_jump_frame >= self.cfg.jump_cooldown;
        if wants_jump && cooled_down && !self.jump_active {
            self.jump_active = true;
            self.jump_velocity = self.cfg.jump_strength;
            self.last_jump_frame = frame;
        }

        let baseline = self.baseline();
        if self.jump_active {
            self.jump_velocity += self.cfg.gravity;
            self.y += self.jump_velocity;
            if self.y >= baseline {
                self.y = baseline;
                self.jump_active = false;
                self.jump_velocity = 0.0;
            }
        } else {
            self.y = baseline;
        }

        self.pos()
    }
}
