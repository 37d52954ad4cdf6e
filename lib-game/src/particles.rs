use macroquad::color::{Color, WHITE};
use macroquad::math::{Vec2, vec2};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::{ObjectKind, RushEvent, config};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

const BANANA_PALETTE: [Color; 3] = [rgb(255, 255, 0), rgb(255, 200, 0), rgb(255, 150, 0)];
const COCONUT_PALETTE: [Color; 3] = [rgb(139, 69, 19), rgb(160, 82, 45), rgb(210, 180, 140)];
const BOMB_PALETTE: [Color; 3] = [rgb(255, 0, 0), rgb(255, 100, 0), rgb(255, 150, 0)];

pub fn palette(kind: ObjectKind) -> &'static [Color; 3] {
    match kind {
        ObjectKind::Banana => &BANANA_PALETTE,
        ObjectKind::Coconut => &COCONUT_PALETTE,
        ObjectKind::Bomb => &BOMB_PALETTE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames left to live.
    pub life: u32,
    pub color: Color,
}

impl Particle {
    pub fn size(&self) -> f32 {
        (self.life / 6).max(1) as f32
    }
}

/// Splash effects. Only ever fed from the frame's events, nothing
/// in the gameplay reads it back.
#[derive(Debug, Clone)]
pub struct Particles {
    cfg: config::sections::Particles,
    particles: Vec<Particle>,
}

impl Particles {
    pub fn new(cfg: config::sections::Particles) -> Self {
        Self {
            cfg,
            particles: Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn burst(&mut self, at: Vec2, palette: &[Color], rng: &mut impl Rng) {
        let jitter = self.cfg.jitter;

        for _ in 0..self.cfg.burst_size {
            let offset = vec2(
                rng.gen_range(-jitter..=jitter) as f32,
                rng.gen_range(-jitter..=jitter) as f32,
            );
            let vel = vec2(rng.gen_range(-5.0..5.0), rng.gen_range(-8.0..-2.0));
            let color = palette.choose(rng).copied().unwrap_or(WHITE);

            self.particles.push(Particle {
                pos: at + offset,
                vel,
                life: self.cfg.life,
                color,
            });
        }
    }

    /// Advances the splashes by one frame. Miss bursts are spawned
    /// before aging, catch bursts after it, so a catch splash shows for
    /// its whole lifetime.
    pub fn step(&mut self, events: &[RushEvent], rng: &mut impl Rng) {
        for event in events {
            if let RushEvent::Missed { pos } = *event {
                self.burst(pos, &BOMB_PALETTE, rng);
            }
        }

        self.update();

        for event in events {
            if let RushEvent::Caught { kind, pos, .. } = *event {
                self.burst(pos, palette(kind), rng);
            }
        }
    }

    pub fn update(&mut self) {
        let gravity = self.cfg.gravity;

        self.particles.retain_mut(|p| {
            p.pos += p.vel;
            p.vel.y += gravity;
            p.life = p.life.saturating_sub(1);

            p.life > 0
        });
    }
}
