use crate::game::position::Position;
use crate::game::score::Score;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A merge at an absolute board position, emitted for animation and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMerged {
    pub position: Position,
    pub old_value: u32,
    pub new_value: u32,
}

/// Outcome of one move attempt over the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveResult {
    pub moved: bool,
    pub tiles_moved: usize,
    pub tiles_merged: usize,
    pub score_gained: Score,
    pub merge_events: Vec<TileMerged>,
}

impl MoveResult {
    pub fn no_move() -> Self {
        MoveResult::default()
    }

    pub fn success(
        tiles_moved: usize,
        tiles_merged: usize,
        score_gained: Score,
        merge_events: Vec<TileMerged>,
    ) -> Self {
        MoveResult {
            moved: true,
            tiles_moved,
            tiles_merged,
            score_gained,
            merge_events,
        }
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.moved {
            write!(
                f,
                "Moved: {} tiles, Merged: {} tiles, Score: +{}",
                self.tiles_moved, self.tiles_merged, self.score_gained
            )
        } else {
            f.write_str("No movement")
        }
    }
}
