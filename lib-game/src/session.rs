use crate::{Difficulty, GameObject};

/// Everything that belongs to one play-through. Dropped on the
/// way back to the menus.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub difficulty: Difficulty,
    pub score: u32,
    /// Can dip below zero while a frame is being resolved.
    /// Clamped by the per-frame game over check.
    pub lives: i32,
    pub frame_count: u64,
    /// In spawn order.
    pub objects: Vec<GameObject>,
}

impl SessionState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            score: 0,
            lives: difficulty.config().starting_lives,
            frame_count: 0,
            objects: Vec::new(),
        }
    }

    pub fn lives_exhausted(&self) -> bool {
        self.lives <= 0
    }

    /// Whether the player has made any progress worth showing
    /// on the pause screen.
    pub fn has_progress(&self) -> bool {
        self.score > 0 || self.lives < self.difficulty.config().starting_lives
    }
}
