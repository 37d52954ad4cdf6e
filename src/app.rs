use lib_game::{MenuKey, Rush};
use log::{info, trace, warn};
use macroquad::prelude::*;

use crate::debug::Debug;
use crate::input::InputModel;
use crate::render::Render;
use crate::tracker::{CaptureError, HandTracker};
use crate::ui::Ui;

/// Runs the window side of the game:
/// * Fixed tickrate timing, with the rate picked by the current screen
/// * Hand capture once per tick
/// * Keyboard capture every frame, delivered on the next tick
/// * Rendering, menus and the debug overlay
/// * Fullscreen toggling
pub struct App {
    fullscreen: bool,
    old_size: (u32, u32),
    accumulated_time: f32,
    tick_rate: f32,

    tracker: Box<dyn HandTracker>,
    pending_keys: Vec<MenuKey>,

    render: Render,
    ui: Ui,
    debug: Debug,
    show_debug: bool,
}

impl App {
    pub fn new(conf: &Conf, tracker: Box<dyn HandTracker>) -> Self {
        Self {
            fullscreen: conf.fullscreen,
            old_size: (conf.window_width as u32, conf.window_height as u32),
            accumulated_time: 0.0,
            tick_rate: 0.0,

            tracker,
            pending_keys: Vec::new(),

            render: Render::new(),
            ui: Ui::new(),
            debug: Debug::new(),
            show_debug: false,
        }
    }

    /// Runs until the player quits or the hand source runs dry.
    pub async fn run(mut self, mut rush: Rush) -> anyhow::Result<()> {
        info!("Done loading");

        loop {
            let input = InputModel::capture();
            let real_dt = get_frame_time();
            self.fullscreen_toggles(&input);
            if input.console_toggle_requested {
                self.show_debug = !self.show_debug;
            }

            self.pending_keys.extend_from_slice(&input.menu_keys);
            self.tracker.poll();

            if self.update_ticking(real_dt, rush.state().tick_rate()) {
                let hand = match self.tracker.next_frame() {
                    Ok(hand) => hand,
                    Err(err @ CaptureError::Exhausted { .. }) => {
                        info!("{err}, stopping");
                        return Ok(());
                    }
                };

                let keys = std::mem::take(&mut self.pending_keys);
                for event in rush.step(hand.as_ref(), &keys) {
                    trace!("{event:?}");
                }

                if rush.quit_requested() {
                    info!("Bye");
                    return Ok(());
                }
            }

            self.render.draw(&rush, real_dt);
            self.ui.draw(&rush, self.render.camera());
            if self.show_debug {
                self.debug.new_frame();
                self.debug.draw_hand(rush.sample(), rush.pointer());
                self.debug.draw_events();
            }

            next_frame().await
        }
    }

    fn fullscreen_toggles(&mut self, input: &InputModel) {
        if !input.fullscreen_toggle_requested {
            return;
        }

        // NOTE: macroquad does not update window config when it goes fullscreen
        set_fullscreen(!self.fullscreen);

        if self.fullscreen {
            macroquad::miniquad::window::set_window_size(self.old_size.0, self.old_size.1);
        }

        self.fullscreen = !self.fullscreen;
    }

    /// Lag of more than two periods is dropped. A change of the
    /// rate restarts the accumulator.
    fn update_ticking(&mut self, real_dt: f32, tick_rate: f32) -> bool {
        if tick_rate != self.tick_rate {
            self.tick_rate = tick_rate;
            self.accumulated_time = 0.0;
        }
        let period = 1.0 / tick_rate;

        self.accumulated_time += real_dt;
        if self.accumulated_time >= 2.0 * period {
            warn!(
                "LAG by {:.2}ms",
                (self.accumulated_time - 2.0 * period) * 1000.0
            );
            self.accumulated_time = 0.0;
            true
        } else if self.accumulated_time >= period {
            self.accumulated_time -= period;
            true
        } else {
            false
        }
    }
}
