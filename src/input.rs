use lib_game::{Difficulty, MenuKey};
use macroquad::prelude::*;

const MENU_KEYS: [(KeyCode, MenuKey); 14] = [
    (KeyCode::Up, MenuKey::Up),
    (KeyCode::Down, MenuKey::Down),
    (KeyCode::Enter, MenuKey::Confirm),
    (KeyCode::KpEnter, MenuKey::Confirm),
    (KeyCode::Space, MenuKey::Confirm),
    (KeyCode::Escape, MenuKey::Back),
    (KeyCode::Key1, MenuKey::Difficulty(Difficulty::Easy)),
    (KeyCode::Key2, MenuKey::Difficulty(Difficulty::Medium)),
    (KeyCode::Key3, MenuKey::Difficulty(Difficulty::Hard)),
    (KeyCode::S, MenuKey::Start),
    (KeyCode::B, MenuKey::ClearDifficulty),
    (KeyCode::R, MenuKey::Restart),
    (KeyCode::M, MenuKey::Menu),
    (KeyCode::Q, MenuKey::Quit),
];

#[derive(Clone, Debug)]
pub struct InputModel {
    pub menu_keys: Vec<MenuKey>,
    pub console_toggle_requested: bool,
    pub fullscreen_toggle_requested: bool,
}

impl InputModel {
    pub fn capture() -> Self {
        let menu_keys = MENU_KEYS
            .iter()
            .filter(|(code, _)| is_key_pressed(*code))
            .map(|(_, key)| *key)
            .collect();
        let fullscreen_toggle_requested = is_key_pressed(KeyCode::F11);
        let console_toggle_requested =
            is_key_pressed(KeyCode::GraveAccent) || is_key_pressed(KeyCode::Apostrophe);

        Self {
            menu_keys,
            console_toggle_requested,
            fullscreen_toggle_requested,
        }
    }
}
