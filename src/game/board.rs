use crate::game::constants::{BOARD_SIZE, INITIAL_TILE_COUNT, NEW_TILE_PROBABILITY_2};
use crate::game::direction::Direction;
use crate::game::merge_line::{merge_line, Line};
use crate::game::move_result::{MoveResult, TileMerged};
use crate::game::position::Position;
use crate::game::random::RandomSource;
use crate::game::score::Score;
use crate::game::tile::Tile;
use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Grid = [[Tile; BOARD_SIZE]; BOARD_SIZE];

/// The 4x4 tile grid.
///
/// Cloning produces a fully independent grid, which is what probes such as
/// [`Board::can_move`] and move previews rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "StoredBoard")]
pub struct Board {
    tiles: Grid,
}

/// Deserialized shape, checked by [`Board::from_values`] before use.
#[derive(Deserialize)]
struct StoredBoard {
    tiles: Vec<Vec<Tile>>,
}

impl TryFrom<StoredBoard> for Board {
    type Error = GameError;

    fn try_from(stored: StoredBoard) -> Result<Self> {
        let rows: Vec<Vec<u32>> = stored
            .tiles
            .iter()
            .map(|row| row.iter().map(|tile| tile.value).collect())
            .collect();
        Board::from_values(&rows)
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            tiles: [[Tile::EMPTY; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// A fresh game board with the initial random tiles.
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut board = Board::empty();
        for _ in 0..INITIAL_TILE_COUNT {
            board.add_new_tile(rng)?;
        }
        Ok(board)
    }

    /// Build a board from external state, one slice per row.
    ///
    /// ```
    /// use merge2048::Board;
    /// let board = Board::from_values(&[
    ///     [2u32, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 4, 0],
    ///     [0, 0, 0, 0],
    /// ]).unwrap();
    /// assert_eq!(board.empty_positions().len(), 14);
    /// ```
    pub fn from_values<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            let columns = rows.first().map_or(0, |row| row.as_ref().len());
            return Err(GameError::InvalidDimensions {
                rows: rows.len(),
                columns,
            });
        }

        let mut board = Board::empty();
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != BOARD_SIZE {
                return Err(GameError::InvalidDimensions {
                    rows: rows.len(),
                    columns: values.len(),
                });
            }
            for (column, &value) in values.iter().enumerate() {
                if !Tile::is_valid_value(value) {
                    return Err(GameError::InvalidTileValue { value });
                }
                board.tiles[row][column] = Tile::new(value);
            }
        }
        Ok(board)
    }

    pub fn tiles(&self) -> &Grid {
        &self.tiles
    }

    pub fn tile(&self, position: Position) -> Tile {
        self.tiles[position.row][position.column]
    }

    pub fn values(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        self.tiles.map(|row| row.map(|tile| tile.value))
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        (0..BOARD_SIZE * BOARD_SIZE)
            .map(Position::from_index)
            .filter(|&position| self.tile(position).is_empty())
            .collect()
    }

    /// Sum of every tile value on the board.
    pub fn total_value(&self) -> Score {
        Score(
            self.tiles
                .iter()
                .flatten()
                .map(|tile| u64::from(tile.value))
                .sum(),
        )
    }

    pub fn highest_tile(&self) -> u32 {
        self.tiles
            .iter()
            .flatten()
            .map(|tile| tile.value)
            .max()
            .unwrap_or(0)
    }

    /// Line `index` read in `direction`'s canonical orientation.
    pub fn line(&self, direction: Direction, index: usize) -> Line {
        std::array::from_fn(|offset| self.tile(direction.cell(index, offset)))
    }

    /// Write `line` back, clearing per-move merge flags.
    pub fn set_line(&mut self, direction: Direction, index: usize, line: &Line) {
        for (offset, tile) in line.iter().enumerate() {
            let position = direction.cell(index, offset);
            self.tiles[position.row][position.column] = tile.settled();
        }
    }

    /// Slide and merge every line toward `direction` without spawning.
    ///
    /// Lines that do not move are left untouched. The grid is only replaced
    /// once every line has merged successfully.
    pub fn shift(&mut self, direction: Direction) -> Result<MoveResult> {
        let mut next = self.clone();
        let mut moved = false;
        let mut tiles_moved = 0;
        let mut tiles_merged = 0;
        let mut score_gained = Score::ZERO;
        let mut merge_events = Vec::new();

        for index in 0..BOARD_SIZE {
            let merge = merge_line(&self.line(direction, index))?;
            if !merge.moved {
                continue;
            }

            moved = true;
            tiles_moved += merge.tiles_moved;
            tiles_merged += merge.tiles_merged;
            score_gained = score_gained + merge.score_gained;
            merge_events.extend(merge.merge_events.iter().map(|event| TileMerged {
                position: direction.cell(index, event.offset),
                old_value: event.old_value,
                new_value: event.new_value,
            }));

            next.set_line(direction, index, &merge.line);
        }

        if !moved {
            return Ok(MoveResult::no_move());
        }
        *self = next;
        Ok(MoveResult::success(
            tiles_moved,
            tiles_merged,
            score_gained,
            merge_events,
        ))
    }

    /// Shift, then spawn one tile if anything moved. All or nothing: on
    /// error the board is left as it was.
    pub fn apply_move<R: RandomSource + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<MoveResult> {
        let mut next = self.clone();
        let result = next.shift(direction)?;
        if !result.moved {
            return Ok(result);
        }

        next.add_new_tile(rng)?;
        for event in &result.merge_events {
            log::debug!(
                "Tile merged at position {}: {} -> {}",
                event.position,
                event.old_value,
                event.new_value
            );
        }

        *self = next;
        Ok(result)
    }

    /// Returns whether any tile moved. A move that changes nothing leaves the
    /// board untouched and spawns nothing.
    pub fn move_tiles<R: RandomSource + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<bool> {
        self.apply_move(direction, rng).map(|result| result.moved)
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    pub fn add_new_tile<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<Position> {
        let empty = self.empty_positions();
        if empty.is_empty() {
            log::warn!("Attempted to add new tile but no empty positions available");
            return Err(GameError::NoEmptyCells);
        }

        let position = empty[rng.next(empty.len())];
        let value = if rng.next(100) < NEW_TILE_PROBABILITY_2 { 2 } else { 4 };
        self.tiles[position.row][position.column] = Tile::new(value);

        log::info!("Added new tile with value {} at position {}", value, position);
        Ok(position)
    }

    /// Probe `direction` on a scratch copy.
    pub fn can_move(&self, direction: Direction) -> bool {
        let mut probe = self.clone();
        match probe.shift(direction) {
            Ok(result) => result.moved,
            Err(e) => {
                log::error!("Error probing move {}: {}", direction, e);
                false
            }
        }
    }

    /// No empty cell and no direction that changes the board.
    pub fn is_game_over(&self) -> bool {
        if !self.empty_positions().is_empty() {
            return false;
        }
        !Direction::ALL.iter().any(|&direction| self.can_move(direction))
    }
}

fn format_val(value: u32) -> String {
    if value == 0 {
        "       ".to_string()
    } else {
        format!("{:^7}", value)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(BOARD_SIZE * 8 - 1);
        for (index, row) in self.tiles.iter().enumerate() {
            if index > 0 {
                writeln!(f, "{}", separator)?;
            }
            let cells: Vec<String> = row.iter().map(|tile| format_val(tile.value)).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}
