//! Persistence collaborators.
//!
//! The game core never touches storage. These services consume the events a
//! [`GameSession`](crate::GameSession) raises and persist game state and high
//! scores through an async key-value store.
//!
//! # Components
//!
//! - `key_value`: async store trait with in-memory and JSON file backends
//! - `game_state_store`: load/save/clear of the last `GameState`
//! - `score_store`: best score across sessions
//! - `persistence`: background task fed by the session's event channel

pub mod game_state_store;
pub mod key_value;
pub mod persistence;
pub mod score_store;

pub use game_state_store::GameStateStore;
pub use key_value::{get_item, set_item, FileStore, KeyValueStore, MemoryStore};
pub use persistence::{PersistenceSummary, PersistenceWorker};
pub use score_store::ScoreStore;
