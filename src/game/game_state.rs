use crate::game::score::Score;
use serde::{Deserialize, Serialize};

/// Derived session state, replaced wholesale on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub score: Score,
    pub game_over: bool,
}

impl GameState {
    pub const INITIAL: GameState = GameState {
        score: Score::ZERO,
        game_over: false,
    };

    pub fn with_score(self, score: Score) -> Self {
        GameState { score, ..self }
    }

    pub fn with_game_over(self) -> Self {
        GameState {
            game_over: true,
            ..self
        }
    }
}
