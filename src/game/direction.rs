use crate::game::constants::BOARD_SIZE;
use crate::game::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Board cell holding element `offset` of line `line` in this direction's
    /// canonical orientation (offset 0 is the edge tiles move toward).
    ///
    /// The same mapping is used for reading lines, writing them back and
    /// translating merge events into board coordinates.
    pub fn cell(self, line: usize, offset: usize) -> Position {
        let far = BOARD_SIZE - 1 - offset;
        match self {
            Direction::Left => Position::new(line, offset),
            Direction::Right => Position::new(line, far),
            Direction::Up => Position::new(offset, line),
            Direction::Down => Position::new(far, line),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}
