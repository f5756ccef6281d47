use crate::{GameError, Result};
use serde::{Deserialize, Serialize};

/// A single cell value: 0 when empty, otherwise a power of two >= 2.
///
/// `merged` marks a tile produced by a merge during the current move; it is
/// cleared whenever a line is compacted at the start of the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    pub value: u32,
    #[serde(default)]
    pub merged: bool,
}

impl Tile {
    pub const EMPTY: Tile = Tile { value: 0, merged: false };

    pub fn new(value: u32) -> Self {
        Tile { value, merged: false }
    }

    /// True for 0 and for powers of two starting at 2.
    pub fn is_valid_value(value: u32) -> bool {
        value == 0 || (value >= 2 && value.is_power_of_two())
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    pub fn is_merged(&self) -> bool {
        self.merged
    }

    pub fn can_merge_with(&self, other: &Tile) -> bool {
        !self.is_empty() && !self.merged && !other.merged && self.value == other.value
    }

    /// Combine two equal tiles into one of double value, flagged as merged.
    pub fn merge_with(&self, other: &Tile) -> Result<Tile> {
        if !self.can_merge_with(other) {
            return Err(GameError::IncompatibleMerge {
                left: self.value,
                right: other.value,
            });
        }

        let value = self
            .value
            .checked_mul(2)
            .ok_or(GameError::TileOverflow { value: self.value })?;
        Ok(Tile {
            value,
            merged: true,
        })
    }

    /// Same value with the per-move merge flag cleared.
    pub fn settled(&self) -> Tile {
        Tile::new(self.value)
    }
}
