mod difficulty;
mod gesture;
mod particles;
mod pointer;
mod session;

pub mod config;
pub mod flow;
pub mod objects;
pub mod scoring;

pub use config::RushCfg;
pub use difficulty::*;
pub use flow::{FlowEffect, FlowInput, FlowState, MainMenuItem, MenuKey};
pub use gesture::*;
pub use objects::{Cosmetics, GameObject, ObjectKind};
pub use particles::*;
pub use pointer::*;
pub use scoring::CatchOutcome;
pub use session::*;

use log::info;
use macroquad::math::Vec2;
use rand::rngs::StdRng;

/// Size of the virtual screen all the gameplay happens on.
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Things that happened during a frame. The shell uses them for
/// logging and feedback, the particle system for splashes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RushEvent {
    SessionStarted(Difficulty),
    SessionEnded,
    Paused,
    Resumed,
    Caught {
        kind: ObjectKind,
        pos: Vec2,
        outcome: CatchOutcome,
    },
    Missed {
        pos: Vec2,
    },
    GameOver {
        score: u32,
    },
    Quit,
}

/// The whole game minus the window. One call to [Rush::step]
/// is one logic frame:
/// 1. Gesture classification
/// 2. Menu / pause state machine
/// 3. Spawning and falling (running only)
/// 4. Missed banana sweep
/// 5. Pointer update
/// 6. Catch resolution
/// 7. Culling of caught and lost objects
/// 8. Particles
/// 9. Game over check
pub struct Rush {
    cfg: RushCfg,
    state: FlowState,
    pointer: Pointer,
    session: Option<SessionState>,
    particles: Particles,
    sample: HandSample,
    rng: StdRng,
    quit_requested: bool,
}

impl Rush {
    pub fn new(cfg: RushCfg, rng: StdRng) -> Self {
        Self {
            cfg,
            state: FlowState::default(),
            pointer: Pointer::new(cfg.pointer),
            session: None,
            particles: Particles::new(cfg.particles),
            sample: HandSample::NO_HAND,
            rng,
            quit_requested: false,
        }
    }

    /// Skips the menus and starts playing right away.
    pub fn start_session(&mut self, difficulty: Difficulty) -> RushEvent {
        info!("Starting a {difficulty:?} session");
        self.session = Some(SessionState::new(difficulty));
        self.particles.clear();
        self.state = FlowState::Running { difficulty };

        RushEvent::SessionStarted(difficulty)
    }

    pub fn step(&mut self, hand: Option<&HandLandmarks>, keys: &[MenuKey]) -> Vec<RushEvent> {
        let mut events = Vec::new();
        self.sample = HandSample::classify(hand);

        let input = FlowInput {
            keys,
            pointing: self.sample.pointing,
            fist_closed: self.sample.fist_closed,
        };
        let (next, effects) = flow::update(self.state, &input);
        if next != self.state {
            info!("{:?} -> {next:?}", self.state);
        }
        self.state = next;
        for effect in effects {
            self.apply_effect(effect, &mut events);
        }

        if self.state.is_simulating() {
            self.simulate(&mut events);
        }

        events
    }

    fn apply_effect(&mut self, effect: FlowEffect, events: &mut Vec<RushEvent>) {
        match effect {
            FlowEffect::StartSession(difficulty) => {
                let event = self.start_session(difficulty);
                events.push(event);
            }
            FlowEffect::EndSession => {
                info!("Leaving the session");
                self.session = None;
                self.particles.clear();
                events.push(RushEvent::SessionEnded);
            }
            FlowEffect::Paused => events.push(RushEvent::Paused),
            FlowEffect::Resumed => events.push(RushEvent::Resumed),
            FlowEffect::Quit => {
                info!("Quit requested");
                self.quit_requested = true;
                events.push(RushEvent::Quit);
            }
        }
    }

    fn simulate(&mut self, events: &mut Vec<RushEvent>) {
        let Some(session) = self.session.as_mut() else {
            log::error!("{:?} without a session", self.state);
            return;
        };
        let first_event = events.len();

        session.frame_count += 1;
        objects::spawn(session, &self.cfg.objects, &mut self.rng);
        objects::advance(session, &self.cfg.objects);
        objects::sweep_missed(session, self.cfg.particles.miss_offset, events);

        let pointer = self.pointer.advance(&self.sample, session.frame_count);
        if self.sample.pointing {
            scoring::resolve(pointer, session, self.cfg.objects.catch_margin, events);
        }
        objects::cull(session, &self.cfg.objects);

        self.particles.step(&events[first_event..], &mut self.rng);

        let exhausted = session.lives_exhausted();
        self.state = self.state.after_resolution(exhausted);
        if exhausted {
            session.lives = 0;
            info!("Game over with {} points", session.score);
            events.push(RushEvent::GameOver {
                score: session.score,
            });
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut SessionState> {
        self.session.as_mut()
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    /// The classified hand of the last frame.
    pub fn sample(&self) -> HandSample {
        self.sample
    }

    pub fn cfg(&self) -> &RushCfg {
        &self.cfg
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
