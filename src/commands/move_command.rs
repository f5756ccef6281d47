// src/commands/move_command.rs - One move command per direction

use crate::game::board::Board;
use crate::game::direction::Direction;
use crate::game::move_result::MoveResult;
use crate::game::random::RandomSource;
use crate::{GameError, Result};

// ============================================================================
// MOVE COMMAND
// ============================================================================

/// Slide/merge command for a single direction.
///
/// `execute` mutates the board and spawns a tile; `preview` runs the same
/// merge against a copy and never spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCommand {
    direction: Direction,
}

impl MoveCommand {
    pub fn new(direction: Direction) -> Self {
        MoveCommand { direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn can_execute(&self, board: &Board) -> bool {
        board.can_move(self.direction)
    }

    /// A disallowed move is a successful `MoveResult` with `moved == false`.
    /// Internal failures come back as `GameError::MoveFailed` and leave the
    /// board as it was.
    pub fn execute<R: RandomSource + ?Sized>(
        &self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<MoveResult> {
        log::debug!("Executing move command for direction {}", self.direction);

        let result = board
            .apply_move(self.direction, rng)
            .map_err(|e| self.failure(e))?;

        if result.moved {
            log::debug!("Move {} completed: {}", self.direction, result);
        } else {
            log::debug!("Move {} cannot be executed", self.direction);
        }
        Ok(result)
    }

    pub fn preview(&self, board: &Board) -> Result<MoveResult> {
        let mut scratch = board.clone();
        scratch.shift(self.direction).map_err(|e| self.failure(e))
    }

    fn failure(&self, error: GameError) -> GameError {
        let error = GameError::MoveFailed {
            direction: self.direction,
            message: error.to_string(),
        };
        log::error!("{}", error);
        error
    }
}

// ============================================================================
// FACTORY
// ============================================================================

impl From<Direction> for MoveCommand {
    fn from(direction: Direction) -> Self {
        MoveCommand::new(direction)
    }
}

/// The four commands, in `Direction::ALL` order.
pub fn all_commands() -> [MoveCommand; 4] {
    Direction::ALL.map(MoveCommand::new)
}
