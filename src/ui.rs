use lib_game::{
    Difficulty, FlowState, MainMenuItem, Rush, SCREEN_HEIGHT, SCREEN_WIDTH, SessionState,
};
use macroquad::prelude::*;
use strum::VariantArray;

const FONT_SCALE: f32 = 1.0;
const TITLE_FONT_SIZE: u16 = 64;
const MAIN_FONT_SIZE: u16 = 32;
const HINT_FONT_SIZE: u16 = 20;
const LINE_SPACING: f32 = 1.4;

const TEXT_COLOR: Color = Color::from_rgba(255, 250, 220, 255);
const HIGHLIGHT_COLOR: Color = Color::from_rgba(255, 225, 53, 255);
const DIM_COLOR: Color = Color::from_rgba(200, 200, 180, 255);
const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.05,
    b: 0.0,
    a: 0.55,
};

static TITLE_TEXT: &str = "BANANA RUSH";
static PAUSE_TEXT: &str = "PAUSED";
static GAMEOVER_TEXT: &str = "GAME OVER";
static DIFFICULTY_TEXT: &str = "SELECT DIFFICULTY";

static MENU_HINT: &str = "Up/Down to move, Enter to choose, Esc to quit";
static DIFFICULTY_HINT: &str = "1/2/3 choose, S start, B clear, Esc back, Q quit";
static RUNNING_HINT: &str = "Point your index finger up to catch, make a fist to pause";
static NO_HAND_HINT: &str = "Show your index finger to the camera";
static PAUSE_HINT: &str = "Point to resume\nM for the main menu, Q to quit";
static GAMEOVER_HINT: &str = "R to play again\nM to pick another difficulty, Q to quit";

static OPTIONS_TEXT: &str = "Move the pointer with your index finger.\n\
Flick the finger up high to jump.\n\
Make a fist to pause, point again to resume.\n\
\n\
Bananas score a point. Coconuts and bombs hurt.\n\
F11 toggles fullscreen, ` toggles the debug overlay.";

static CREDITS_TEXT: &str = "A hand tracking arcade game.\n\
Built with macroquad.\n\
\n\
Thanks for playing!";

static BACK_HINT: &str = "Esc to go back";

/// Menus, overlays and the HUD. Everything is laid out on the
/// same virtual screen the game runs on.
pub struct Ui;

impl Ui {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, rush: &Rush, camera: &Camera2D) {
        set_camera(camera);

        match rush.state() {
            FlowState::MainMenu { cursor } => self.draw_main_menu(cursor),
            FlowState::Options => self.draw_text_page("OPTIONS", OPTIONS_TEXT),
            FlowState::Credits => self.draw_text_page("CREDITS", CREDITS_TEXT),
            FlowState::DifficultySelect { selected } => self.draw_difficulty_select(selected),
            FlowState::Running { .. } => {
                if let Some(session) = rush.session() {
                    self.draw_hud(session);
                }
                let hint = if rush.sample().raw_tip.is_some() {
                    RUNNING_HINT
                } else {
                    NO_HAND_HINT
                };
                self.draw_centered(hint, SCREEN_HEIGHT - 16.0, HINT_FONT_SIZE, DIM_COLOR);
            }
            FlowState::Paused { .. } => {
                if let Some(session) = rush.session() {
                    self.draw_hud(session);
                }
                self.draw_announcement_text(PAUSE_TEXT, Some(PAUSE_HINT));
                if let Some(session) = rush.session().filter(|s| s.has_progress()) {
                    let stats = format!("Score {}   Lives {}", session.score, session.lives);
                    self.draw_centered(&stats, SCREEN_HEIGHT * 0.35, MAIN_FONT_SIZE, HIGHLIGHT_COLOR);
                }
            }
            FlowState::GameOver { difficulty } => {
                self.draw_announcement_text(GAMEOVER_TEXT, Some(GAMEOVER_HINT));
                let score = rush.session().map_or(0, |s| s.score);
                let summary = format!("{} - final score {score}", difficulty.title());
                self.draw_centered(&summary, SCREEN_HEIGHT * 0.35, MAIN_FONT_SIZE, HIGHLIGHT_COLOR);
            }
        }
    }

    fn draw_main_menu(&self, cursor: usize) {
        self.draw_centered(TITLE_TEXT, SCREEN_HEIGHT * 0.25, TITLE_FONT_SIZE, HIGHLIGHT_COLOR);

        for (idx, item) in MainMenuItem::VARIANTS.iter().enumerate() {
            let selected = idx == cursor;
            let label = if selected {
                format!("> {} <", item.label())
            } else {
                item.label().to_owned()
            };
            let y = SCREEN_HEIGHT * 0.45 + idx as f32 * MAIN_FONT_SIZE as f32 * LINE_SPACING;
            let color = if selected { HIGHLIGHT_COLOR } else { TEXT_COLOR };

            self.draw_centered(&label, y, MAIN_FONT_SIZE, color);
        }

        self.draw_centered(MENU_HINT, SCREEN_HEIGHT - 24.0, HINT_FONT_SIZE, DIM_COLOR);
    }

    fn draw_difficulty_select(&self, selected: Option<Difficulty>) {
        self.draw_centered(DIFFICULTY_TEXT, SCREEN_HEIGHT * 0.2, MAIN_FONT_SIZE, HIGHLIGHT_COLOR);

        for (idx, difficulty) in Difficulty::VARIANTS.iter().enumerate() {
            let chosen = selected == Some(*difficulty);
            let color = if chosen { HIGHLIGHT_COLOR } else { TEXT_COLOR };
            let y = SCREEN_HEIGHT * 0.35 + idx as f32 * 90.0;
            let title = format!("{}. {}", idx + 1, difficulty.title());

            if chosen {
                draw_rectangle_lines(
                    SCREEN_WIDTH * 0.2,
                    y - MAIN_FONT_SIZE as f32,
                    SCREEN_WIDTH * 0.6,
                    80.0,
                    3.0,
                    HIGHLIGHT_COLOR,
                );
            }
            self.draw_centered(&title, y, MAIN_FONT_SIZE, color);
            self.draw_centered(difficulty.blurb(), y + 30.0, HINT_FONT_SIZE, DIM_COLOR);
        }

        let status = match selected {
            Some(difficulty) => format!("{} selected, press S to start", difficulty.title()),
            None => "No difficulty selected".to_owned(),
        };
        self.draw_centered(&status, SCREEN_HEIGHT * 0.88, HINT_FONT_SIZE, TEXT_COLOR);
        self.draw_centered(DIFFICULTY_HINT, SCREEN_HEIGHT - 24.0, HINT_FONT_SIZE, DIM_COLOR);
    }

    fn draw_text_page(&self, title: &str, body: &str) {
        self.draw_centered(title, SCREEN_HEIGHT * 0.2, MAIN_FONT_SIZE, HIGHLIGHT_COLOR);
        self.draw_lines(body, SCREEN_HEIGHT * 0.35, HINT_FONT_SIZE, TEXT_COLOR);
        self.draw_centered(BACK_HINT, SCREEN_HEIGHT - 24.0, HINT_FONT_SIZE, DIM_COLOR);
    }

    fn draw_hud(&self, session: &SessionState) {
        let params = TextParams {
            font_size: MAIN_FONT_SIZE,
            font_scale: FONT_SCALE,
            color: TEXT_COLOR,
            ..Default::default()
        };

        draw_text_ex(&format!("Score: {}", session.score), 16.0, 36.0, params.clone());
        draw_text_ex(&format!("Lives: {}", session.lives), 16.0, 72.0, params.clone());

        let difficulty = session.difficulty.title();
        let width = measure_text(difficulty, None, MAIN_FONT_SIZE, FONT_SCALE).width;
        draw_text_ex(difficulty, SCREEN_WIDTH - width - 16.0, 36.0, params);
    }

    fn draw_announcement_text(&self, text: &str, hint: Option<&str>) {
        draw_rectangle(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, BACKDROP);

        self.draw_centered(text, SCREEN_HEIGHT / 2.0, TITLE_FONT_SIZE, TEXT_COLOR);

        let Some(hint) = hint else {
            return;
        };
        self.draw_lines(
            hint,
            SCREEN_HEIGHT / 2.0 + TITLE_FONT_SIZE as f32,
            HINT_FONT_SIZE,
            TEXT_COLOR,
        );
    }

    fn draw_lines(&self, text: &str, top: f32, font_size: u16, color: Color) {
        for (idx, line) in text.lines().enumerate() {
            let y = top + idx as f32 * font_size as f32 * LINE_SPACING;
            self.draw_centered(line, y, font_size, color);
        }
    }

    /// Draws a line of text centered horizontally with its
    /// baseline at `y`.
    fn draw_centered(&self, text: &str, y: f32, font_size: u16, color: Color) {
        let center = get_text_center(text, None, font_size, FONT_SCALE, 0.0);

        draw_text_ex(
            text,
            SCREEN_WIDTH / 2.0 - center.x,
            y,
            TextParams {
                font_size,
                font_scale: FONT_SCALE,
                color,
                ..Default::default()
            },
        );
    }
}
