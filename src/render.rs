use lib_game::{
    FlowState, GameObject, HandSample, ObjectKind, Particles, Pointer, Rush, SCREEN_HEIGHT,
    SCREEN_WIDTH, SessionState,
};
use macroquad::prelude::*;
use macroquad_particles::{self as particles, BlendMode, ColorCurve, EmissionShape, EmitterConfig};

pub const MENU_BACKGROUND: Color = Color::from_rgba(20, 80, 40, 255);
const STRIPE_COUNT: usize = 8;
const POINTER_RADIUS: f32 = 18.0;

const BANANA_COLOR: Color = Color::from_rgba(255, 225, 53, 255);
const BANANA_TIP_COLOR: Color = Color::from_rgba(92, 64, 20, 255);
const COCONUT_COLOR: Color = Color::from_rgba(110, 62, 24, 255);
const COCONUT_EYE_COLOR: Color = Color::from_rgba(50, 28, 10, 255);
const BOMB_COLOR: Color = Color::from_rgba(30, 30, 36, 255);
const FUSE_COLOR: Color = Color::from_rgba(200, 170, 120, 255);

fn sparkle() -> EmitterConfig {
    EmitterConfig {
        emitting: false,
        lifetime: 0.4,
        lifetime_randomness: 0.5,
        explosiveness: 0.0,
        amount: 24,
        initial_direction_spread: 2.0 * std::f32::consts::PI,
        initial_velocity: 40.0,
        size: 3.0,
        gravity: vec2(0.0, 120.0),
        blend_mode: BlendMode::Additive,
        emission_shape: EmissionShape::Sphere {
            radius: POINTER_RADIUS,
        },
        colors_curve: ColorCurve {
            start: Color::from_hex(0xFFF59D),
            mid: Color::from_hex(0xFFD54F),
            end: BLANK,
        },
        ..Default::default()
    }
}

/// Draws the playfield. Reads the game, never writes to it.
pub struct Render {
    camera: Camera2D,
    sparkle: particles::Emitter,
    time: f32,
}

impl Render {
    pub fn new() -> Self {
        Self {
            camera: Camera2D::default(),
            sparkle: particles::Emitter::new(sparkle()),
            time: 0.0,
        }
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    pub fn draw(&mut self, rush: &Rush, real_dt: f32) {
        self.time += real_dt;
        self.update_camera();
        set_camera(&self.camera);

        let state = rush.state();
        let tint = state
            .difficulty()
            .map_or(MENU_BACKGROUND, |d| d.config().background_tint);
        clear_background(tint);
        self.draw_stripes(tint);

        let Some(session) = rush.session() else {
            return;
        };

        Self::draw_objects(session);
        Self::draw_particles(rush.particles());
        self.draw_pointer(rush.pointer(), rush.sample(), state);
    }

    fn update_camera(&mut self) {
        self.camera = Camera2D::from_display_rect(Rect {
            x: 0.0,
            y: 0.0,
            w: SCREEN_WIDTH,
            h: SCREEN_HEIGHT,
        });
        self.camera.zoom.y *= -1.0;
    }

    /// Slowly swaying jungle leaves in the background.
    fn draw_stripes(&self, tint: Color) {
        let stripe_width = SCREEN_WIDTH / STRIPE_COUNT as f32;
        let leaf = Color::new(
            (tint.r * 1.3).min(1.0),
            (tint.g * 1.3).min(1.0),
            (tint.b * 1.3).min(1.0),
            0.25,
        );

        for idx in 0..STRIPE_COUNT {
            let phase = self.time * 0.8 + idx as f32 * 0.7;
            let x = idx as f32 * stripe_width + phase.sin() * 12.0;
            let w = stripe_width * (0.35 + 0.1 * (phase * 1.3).cos());
            draw_rectangle(x, 0.0, w, SCREEN_HEIGHT, leaf);
        }
    }

    fn draw_objects(session: &SessionState) {
        for obj in &session.objects {
            match obj.kind {
                ObjectKind::Banana => Self::draw_banana(obj),
                ObjectKind::Coconut => Self::draw_coconut(obj),
                ObjectKind::Bomb => Self::draw_bomb(obj),
            }
        }
    }

    fn draw_banana(obj: &GameObject) {
        let look = obj.cosmetics;
        let r = obj.radius * look.draw_scale(obj.kind);
        let (x, y) = (obj.pos.x, obj.pos.y);
        let dir = Vec2::from_angle(look.rotation.to_radians());

        draw_poly(x, y, 16, r * 0.9, look.rotation, BANANA_COLOR);
        draw_poly_lines(x, y, 16, r * 0.9, look.rotation, 2.0, BANANA_TIP_COLOR);
        draw_circle(x + dir.x * r * 0.8, y + dir.y * r * 0.8, r * 0.15, BANANA_TIP_COLOR);
    }

    fn draw_coconut(obj: &GameObject) {
        let look = obj.cosmetics;
        let r = obj.radius * look.draw_scale(obj.kind);
        let (x, y) = (obj.pos.x, obj.pos.y);

        draw_poly(x, y, 9, r * 0.85, look.rotation, COCONUT_COLOR);
        for eye in 0..3 {
            let angle = look.rotation.to_radians() + eye as f32 * std::f32::consts::TAU / 3.0;
            let at = obj.pos + Vec2::from_angle(angle) * r * 0.35;
            draw_circle(at.x, at.y, r * 0.1, COCONUT_EYE_COLOR);
        }
    }

    fn draw_bomb(obj: &GameObject) {
        let look = obj.cosmetics;
        let r = obj.radius * look.draw_scale(obj.kind);
        let (x, y) = (obj.pos.x, obj.pos.y);
        let fuse = obj.pos + Vec2::from_angle((look.rotation - 90.0).to_radians()) * r * 1.1;
        let flicker = 0.6 + 0.4 * (look.wobble_phase * 8.0).sin().abs();

        draw_circle(x, y, r * 0.8, BOMB_COLOR);
        draw_circle(x - r * 0.25, y - r * 0.25, r * 0.15, GRAY);
        draw_line(x, y, fuse.x, fuse.y, 3.0, FUSE_COLOR);
        draw_circle(fuse.x, fuse.y, r * 0.15 * flicker, ORANGE);
    }

    fn draw_particles(particles: &Particles) {
        for p in particles.iter() {
            draw_circle(p.pos.x, p.pos.y, p.size(), p.color);
        }
    }

    fn draw_pointer(&mut self, pointer: &Pointer, sample: HandSample, state: FlowState) {
        let pos = pointer.pos();
        let active = sample.pointing && state.is_simulating();
        let (glow, ring) = if active {
            (Color::new(1.0, 1.0, 0.6, 0.35), YELLOW)
        } else {
            (Color::new(0.8, 0.8, 0.8, 0.25), LIGHTGRAY)
        };

        self.sparkle.config.emitting = active;
        self.sparkle.draw(pos);

        draw_circle(pos.x, pos.y, POINTER_RADIUS * 1.6, glow);
        draw_circle(pos.x, pos.y, POINTER_RADIUS, glow);
        draw_circle_lines(pos.x, pos.y, POINTER_RADIUS, 3.0, ring);
    }
}
