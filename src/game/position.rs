use crate::game::constants::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 0-indexed `{row, column}` cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }

    /// Row-major index to position.
    pub fn from_index(index: usize) -> Self {
        Position::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    pub fn to_index(&self) -> usize {
        self.row * BOARD_SIZE + self.column
    }

    pub fn is_valid(&self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
