/// Side length of the square board.
pub const BOARD_SIZE: usize = 4;

/// Tiles spawned on a fresh board.
pub const INITIAL_TILE_COUNT: usize = 2;

/// Percent chance that a spawned tile is a 2 (otherwise 4).
pub const NEW_TILE_PROBABILITY_2: usize = 90;

/// Minimum swipe length, on the dominant axis, that counts as a move.
pub const MINIMUM_SWIPE_DISTANCE: i32 = 30;
