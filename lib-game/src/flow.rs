use crate::Difficulty;

/// Discrete keyboard intents. The shell maps physical keys onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Confirm,
    Back,
    Difficulty(Difficulty),
    Start,
    ClearDifficulty,
    Restart,
    Menu,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::VariantArray)]
pub enum MainMenuItem {
    Start,
    Options,
    Credits,
    Exit,
}

impl MainMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MainMenuItem::Start => "START",
            MainMenuItem::Options => "OPTIONS",
            MainMenuItem::Credits => "CREDITS",
            MainMenuItem::Exit => "EXIT",
        }
    }

    fn cursor(self) -> usize {
        self as usize
    }

    fn at(cursor: usize) -> Self {
        use strum::VariantArray;

        Self::VARIANTS[cursor % Self::VARIANTS.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    MainMenu { cursor: usize },
    Options,
    Credits,
    DifficultySelect { selected: Option<Difficulty> },
    Running { difficulty: Difficulty },
    Paused { difficulty: Difficulty },
    GameOver { difficulty: Difficulty },
}

/// Side effects of a transition, carried out by the frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEffect {
    StartSession(Difficulty),
    EndSession,
    Paused,
    Resumed,
    Quit,
}

/// One frame worth of input for the state machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowInput<'a> {
    pub keys: &'a [MenuKey],
    pub pointing: bool,
    pub fist_closed: bool,
}

impl Default for FlowState {
    fn default() -> Self {
        FlowState::MainMenu { cursor: 0 }
    }
}

impl FlowState {
    /// Logic ticks per second while in this state. The menus do
    /// not need to poll the camera as often as the game does.
    pub fn tick_rate(&self) -> f32 {
        match self {
            FlowState::Running { .. } => 60.0,
            FlowState::MainMenu { .. } | FlowState::Options | FlowState::Credits => 30.0,
            FlowState::DifficultySelect { .. }
            | FlowState::Paused { .. }
            | FlowState::GameOver { .. } => 10.0,
        }
    }

    pub fn is_simulating(&self) -> bool {
        matches!(self, FlowState::Running { .. })
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match *self {
            FlowState::Running { difficulty }
            | FlowState::Paused { difficulty }
            | FlowState::GameOver { difficulty } => Some(difficulty),
            FlowState::DifficultySelect { selected } => selected,
            _ => None,
        }
    }

    /// Called once per frame after catches were resolved.
    pub fn after_resolution(self, lives_exhausted: bool) -> Self {
        match self {
            FlowState::Running { difficulty } if lives_exhausted => {
                FlowState::GameOver { difficulty }
            }
            other => other,
        }
    }
}

/// Runs the state machine for one frame. Gestures are looked at
/// first, then the keys in the order they were pressed.
pub fn update(state: FlowState, input: &FlowInput) -> (FlowState, Vec<FlowEffect>) {
    let mut effects = Vec::new();
    let mut state = gesture_transition(state, input, &mut effects);

    for key in input.keys {
        state = key_transition(state, *key, &mut effects);
    }

    (state, effects)
}

fn gesture_transition(
    state: FlowState,
    input: &FlowInput,
    effects: &mut Vec<FlowEffect>,
) -> FlowState {
    match state {
        FlowState::Running { difficulty } if input.fist_closed => {
            effects.push(FlowEffect::Paused);
            FlowState::Paused { difficulty }
        }
        FlowState::Paused { difficulty } if input.pointing && !input.fist_closed => {
            effects.push(FlowEffect::Resumed);
            FlowState::Running { difficulty }
        }
        other => other,
    }
}

fn key_transition(state: FlowState, key: MenuKey, effects: &mut Vec<FlowEffect>) -> FlowState {
    let count = <MainMenuItem as strum::VariantArray>::VARIANTS.len();

    match (state, key) {
        (FlowState::MainMenu { cursor }, MenuKey::Up) => FlowState::MainMenu {
            cursor: (cursor + count - 1) % count,
        },
        (FlowState::MainMenu { cursor }, MenuKey::Down) => FlowState::MainMenu {
            cursor: (cursor + 1) % count,
        },
        (FlowState::MainMenu { cursor }, MenuKey::Confirm) => match MainMenuItem::at(cursor) {
            MainMenuItem::Start => FlowState::DifficultySelect { selected: None },
            MainMenuItem::Options => FlowState::Options,
            MainMenuItem::Credits => FlowState::Credits,
            MainMenuItem::Exit => {
                effects.push(FlowEffect::Quit);
                state
            }
        },
        (FlowState::MainMenu { .. }, MenuKey::Back) => {
            effects.push(FlowEffect::Quit);
            state
        }

        (FlowState::Options, MenuKey::Back) => FlowState::MainMenu {
            cursor: MainMenuItem::Options.cursor(),
        },
        (FlowState::Credits, MenuKey::Back) => FlowState::MainMenu {
            cursor: MainMenuItem::Credits.cursor(),
        },

        (FlowState::DifficultySelect { .. }, MenuKey::Difficulty(difficulty)) => {
            FlowState::DifficultySelect {
                selected: Some(difficulty),
            }
        }
        (FlowState::DifficultySelect { selected: Some(difficulty) }, MenuKey::Start) => {
            effects.push(FlowEffect::StartSession(difficulty));
            FlowState::Running { difficulty }
        }
        (FlowState::DifficultySelect { .. }, MenuKey::ClearDifficulty) => {
            FlowState::DifficultySelect { selected: None }
        }
        (FlowState::DifficultySelect { .. }, MenuKey::Back) => FlowState::MainMenu {
            cursor: MainMenuItem::Start.cursor(),
        },

        (FlowState::Paused { .. }, MenuKey::Menu) => {
            effects.push(FlowEffect::EndSession);
            FlowState::MainMenu { cursor: 0 }
        }

        (FlowState::GameOver { difficulty }, MenuKey::Restart) => {
            effects.push(FlowEffect::StartSession(difficulty));
            FlowState::Running { difficulty }
        }
        (FlowState::GameOver { .. }, MenuKey::Menu) => {
            effects.push(FlowEffect::EndSession);
            FlowState::DifficultySelect { selected: None }
        }

        (
            FlowState::DifficultySelect { .. } | FlowState::Paused { .. } | FlowState::GameOver { .. },
            MenuKey::Quit,
        ) => {
            effects.push(FlowEffect::Quit);
            state
        }

        (other, _) => other,
    }
}
