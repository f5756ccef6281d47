//! # merge2048
//!
//! Core mechanics of the 2048 tile-merging puzzle.
//!
//! ## Features
//!
//! - **Game Engine**: tiles, the line merge algorithm and the 4x4 board
//! - **Move Commands**: one command per direction with execute/preview semantics
//! - **Game Session**: score and game-over tracking with observer notifications
//! - **Storage**: async key-value persistence for game state and high scores
//!
//! ## Usage
//!
//! ```rust
//! use merge2048::{Direction, GameSession, SeededRandom};
//!
//! let mut session = GameSession::new(Box::new(SeededRandom::new(7))).unwrap();
//! let result = session.move_direction(Direction::Left).unwrap();
//! println!("{} / score {}", result, session.state().score);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic: tiles, lines, board
pub mod game;

/// Directional move commands
pub mod commands;

/// Game session and observers
pub mod services;

/// Persistence collaborators
pub mod storage;

/// Logger setup
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use commands::{all_commands, MoveCommand};
pub use game::*;
pub use services::game_session::{GameEvent, GameObserver, GameSession};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the merge2048 library
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Invalid board dimensions: {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("Invalid tile value: {value}")]
    InvalidTileValue { value: u32 },

    #[error("No empty cells available")]
    NoEmptyCells,

    #[error("Cannot merge incompatible tiles ({left} and {right})")]
    IncompatibleMerge { left: u32, right: u32 },

    #[error("Merging two {value} tiles overflows the tile range")]
    TileOverflow { value: u32 },

    #[error("Failed to execute move {direction}: {message}")]
    MoveFailed { direction: Direction, message: String },

    #[error("Game session has been disposed")]
    SessionDisposed,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GameError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
