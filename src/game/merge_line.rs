//! The direction-neutral line merge.
//!
//! A line is one row or column read in canonical orientation: offset 0 is the
//! edge the tiles move toward. Every directional move reduces to this.

use crate::game::constants::BOARD_SIZE;
use crate::game::score::Score;
use crate::game::tile::Tile;
use crate::Result;

pub type Line = [Tile; BOARD_SIZE];

/// A merge inside one line; `offset` is where the merged tile ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMergeEvent {
    pub offset: usize,
    pub old_value: u32,
    pub new_value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMerge {
    pub line: Line,
    pub moved: bool,
    pub tiles_moved: usize,
    pub tiles_merged: usize,
    pub score_gained: Score,
    pub merge_events: Vec<LineMergeEvent>,
}

/// Compact, merge and re-compact a single line toward offset 0.
///
/// Leftmost pairs merge first and a tile merges at most once, so
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` rather than `[8, 0, 0, 0]`.
pub fn merge_line(line: &Line) -> Result<LineMerge> {
    let mut result = [Tile::EMPTY; BOARD_SIZE];
    let mut moved = false;
    let mut tiles_moved = 0;

    let mut filled = 0;
    for (index, tile) in line.iter().enumerate() {
        if tile.is_empty() {
            continue;
        }
        result[filled] = tile.settled();
        if filled != index {
            moved = true;
            tiles_moved += 1;
        }
        filled += 1;
    }

    let mut tiles_merged = 0;
    let mut score_gained = Score::ZERO;
    let mut merge_events = Vec::new();

    let mut index = 0;
    while index + 1 < filled {
        if !result[index].can_merge_with(&result[index + 1]) {
            index += 1;
            continue;
        }

        let old_value = result[index].value;
        let merged = result[index].merge_with(&result[index + 1])?;
        result[index] = merged;
        result[index + 1] = Tile::EMPTY;

        // each earlier merge freed one slot in front of this tile
        merge_events.push(LineMergeEvent {
            offset: index - tiles_merged,
            old_value,
            new_value: merged.value,
        });
        score_gained = score_gained + Score(u64::from(merged.value));
        tiles_merged += 1;
        moved = true;
        index += 2;
    }

    if tiles_merged > 0 {
        let mut write = 0;
        for read in 0..BOARD_SIZE {
            if result[read].is_empty() {
                continue;
            }
            if write != read {
                result[write] = result[read];
                result[read] = Tile::EMPTY;
            }
            write += 1;
        }
    }

    Ok(LineMerge {
        line: result,
        moved,
        tiles_moved,
        tiles_merged,
        score_gained,
        merge_events,
    })
}
