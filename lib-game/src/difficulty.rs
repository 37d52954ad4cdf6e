use macroquad::color::Color;
use serde::{Deserialize, Serialize};

use crate::ObjectKind;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// What catching a hazard costs the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    /// Take points away. The score never drops below zero.
    ScoreDelta(u32),
    LifeLoss(i32),
    InstantGameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyConfig {
    pub starting_lives: i32,
    pub object_speed: f32,
    pub spawn_interval_frames: u64,
    pub coconut_penalty: Penalty,
    pub bomb_penalty: Penalty,
    /// Letting a banana fall through costs a life.
    pub miss_penalty_enabled: bool,
    /// Spawn odds in percent, in banana / coconut / bomb order.
    pub spawn_weights: [u32; 3],
    pub background_tint: Color,
}

const EASY: DifficultyConfig = DifficultyConfig {
    starting_lives: 5,
    object_speed: 2.0,
    spawn_interval_frames: 40,
    coconut_penalty: Penalty::ScoreDelta(1),
    bomb_penalty: Penalty::LifeLoss(1),
    miss_penalty_enabled: false,
    spawn_weights: [80, 15, 5],
    background_tint: Color::new(34.0 / 255.0, 139.0 / 255.0, 34.0 / 255.0, 1.0),
};

const MEDIUM: DifficultyConfig = DifficultyConfig {
    starting_lives: 3,
    object_speed: 3.0,
    spawn_interval_frames: 30,
    coconut_penalty: Penalty::LifeLoss(1),
    bomb_penalty: Penalty::LifeLoss(2),
    miss_penalty_enabled: false,
    spawn_weights: [70, 20, 10],
    background_tint: Color::new(25.0 / 255.0, 100.0 / 255.0, 25.0 / 255.0, 1.0),
};

const HARD: DifficultyConfig = DifficultyConfig {
    starting_lives: 2,
    object_speed: 4.0,
    spawn_interval_frames: 25,
    coconut_penalty: Penalty::InstantGameOver,
    bomb_penalty: Penalty::InstantGameOver,
    miss_penalty_enabled: true,
    spawn_weights: [60, 25, 15],
    background_tint: Color::new(15.0 / 255.0, 60.0 / 255.0, 15.0 / 255.0, 1.0),
};

impl Difficulty {
    pub fn config(self) -> &'static DifficultyConfig {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Difficulty::Easy => "Forgiving / score penalties only",
            Difficulty::Medium => "Balanced challenge & life loss",
            Difficulty::Hard => "High risk: instant failures",
        }
    }
}

impl DifficultyConfig {
    /// The penalty for catching `kind`, if it is a hazard at all.
    pub fn penalty_for(&self, kind: ObjectKind) -> Option<Penalty> {
        match kind {
            ObjectKind::Banana => None,
            ObjectKind::Coconut => Some(self.coconut_penalty),
            ObjectKind::Bomb => Some(self.bomb_penalty),
        }
    }

    /// Maps a roll in `0..100` onto an object kind using the spawn weights.
    pub fn kind_for_roll(&self, roll: u32) -> ObjectKind {
        let [banana, coconut, _] = self.spawn_weights;

        if roll < banana {
            ObjectKind::Banana
        } else if roll < banana + coconut {
            ObjectKind::Coconut
        } else {
            ObjectKind::Bomb
        }
    }
}
