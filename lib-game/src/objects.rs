use std::f32::consts::TAU;

use rand::Rng;
use macroquad::math::{Vec2, vec2};

use crate::{DifficultyConfig, RushEvent, SCREEN_HEIGHT, SCREEN_WIDTH, SessionState, config};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Banana,
    Coconut,
    Bomb,
}

/// Purely visual state. The gameplay code writes it, only the
/// renderer reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cosmetics {
    /// Degrees.
    pub rotation: f32,
    pub rotation_speed: f32,
    pub scale: f32,
    pub wobble_phase: f32,
    /// Horizontal drift, reflected at the screen edges.
    pub swing: f32,
}

impl Cosmetics {
    pub const STILL: Self = Self {
        rotation: 0.0,
        rotation_speed: 0.0,
        scale: 1.0,
        wobble_phase: 0.0,
        swing: 0.0,
    };

    pub fn roll(rng: &mut impl Rng) -> Self {
        Self {
            rotation: rng.gen_range(0..=360) as f32,
            rotation_speed: rng.gen_range(2.0..8.0),
            scale: rng.gen_range(0.8..1.2),
            wobble_phase: rng.gen_range(0.0..TAU),
            swing: rng.gen_range(-2.0..2.0),
        }
    }

    /// The scale to draw with, including the wobble pulse.
    /// Bombs keep a constant size.
    pub fn draw_scale(&self, kind: ObjectKind) -> f32 {
        match kind {
            ObjectKind::Bomb => self.scale,
            _ => self.scale * (1.0 + 0.1 * self.wobble_phase.sin()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameObject {
    pub kind: ObjectKind,
    pub pos: Vec2,
    pub radius: f32,
    pub caught: bool,
    /// Multiplier on the difficulty fall speed.
    pub fall_speed: f32,
    pub cosmetics: Cosmetics,
}

impl GameObject {
    /// An object with no drift and the nominal fall speed.
    pub fn new(kind: ObjectKind, pos: Vec2, radius: f32) -> Self {
        Self {
            kind,
            pos,
            radius,
            caught: false,
            fall_speed: 1.0,
            cosmetics: Cosmetics::STILL,
        }
    }

    pub fn spawn(
        cfg: &config::sections::Objects,
        difficulty: &DifficultyConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let kind = difficulty.kind_for_roll(rng.gen_range(0..100));
        let x = rng.gen_range(cfg.spawn_margin..=SCREEN_WIDTH as i32 - cfg.spawn_margin);
        let cosmetics = Cosmetics::roll(rng);
        let fall_speed = rng.gen_range(0.8..1.2);

        Self {
            kind,
            pos: vec2(x as f32, cfg.spawn_y),
            radius: cfg.radius,
            caught: false,
            fall_speed,
            cosmetics,
        }
    }

    fn fall(&mut self, object_speed: f32) {
        self.pos.y += object_speed * self.fall_speed;
    }

    fn drift(&mut self, cfg: &config::sections::Objects) {
        let look = &mut self.cosmetics;
        look.rotation += look.rotation_speed;
        look.wobble_phase += cfg.wobble_step;

        self.pos.x += look.swing * cfg.swing_factor;
        if self.pos.x < cfg.edge_margin {
            self.pos.x = cfg.edge_margin;
            look.swing = look.swing.abs();
        } else if self.pos.x > SCREEN_WIDTH - cfg.edge_margin {
            self.pos.x = SCREEN_WIDTH - cfg.edge_margin;
            look.swing = -look.swing.abs();
        }
    }
}

/// Adds a new object on the frames that are a multiple of the spawn interval.
pub fn spawn(session: &mut SessionState, cfg: &config::sections::Objects, rng: &mut impl Rng) {
    let difficulty = session.difficulty.config();
    if session.frame_count % difficulty.spawn_interval_frames != 0 {
        return;
    }

    let obj = GameObject::spawn(cfg, difficulty, rng);
    log::trace!("Spawned {:?} at {}", obj.kind, obj.pos.x);
    session.objects.push(obj);
}

/// Moves every object down and steps its drift.
pub fn advance(session: &mut SessionState, cfg: &config::sections::Objects) {
    let speed = session.difficulty.config().object_speed;

    for obj in &mut session.objects {
        obj.fall(speed);
        obj.drift(cfg);
    }
}

/// Takes a life for every banana that got past the bottom edge.
/// Does nothing on difficulties without the miss penalty.
pub fn sweep_missed(session: &mut SessionState, miss_offset: f32, events: &mut Vec<RushEvent>) {
    if !session.difficulty.config().miss_penalty_enabled {
        return;
    }

    let mut missed = 0;
    session.objects.retain(|obj| {
        let is_miss = obj.kind == ObjectKind::Banana && !obj.caught && obj.pos.y >= SCREEN_HEIGHT;
        if is_miss {
            missed += 1;
            events.push(RushEvent::Missed {
                pos: vec2(obj.pos.x, SCREEN_HEIGHT - miss_offset),
            });
        }

        !is_miss
    });

    session.lives -= missed;
}

/// Drops caught objects and the ones that fell far enough off-screen.
/// Must run after the frame's catches were resolved.
pub fn cull(session: &mut SessionState, cfg: &config::sections::Objects) {
    let bottom = SCREEN_HEIGHT + cfg.cull_margin;
    session
        .objects
        .retain(|obj| !obj.caught && obj.pos.y < bottom);
}
