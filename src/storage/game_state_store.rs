//! Last known `GameState`, stored under a single key.
//!
//! Storage failures are logged and swallowed: losing a save must never
//! interrupt play.

use crate::game::game_state::GameState;
use crate::storage::key_value::{get_item, set_item, KeyValueStore};

pub const GAME_STATE_KEY: &str = "gameState";

#[derive(Debug, Clone)]
pub struct GameStateStore<S> {
    store: S,
}

impl<S: KeyValueStore> GameStateStore<S> {
    pub fn new(store: S) -> Self {
        GameStateStore { store }
    }

    pub async fn load(&self) -> Option<GameState> {
        match get_item::<GameState, _>(&self.store, GAME_STATE_KEY).await {
            Ok(Some(state)) => {
                log::info!(
                    "Loaded game state: Score={}, GameOver={}",
                    state.score,
                    state.game_over
                );
                Some(state)
            }
            Ok(None) => None,
            Err(e) => {
                log::error!("Failed to load game state: {}", e);
                None
            }
        }
    }

    /// Returns whether the state was written.
    pub async fn save(&self, state: &GameState) -> bool {
        match set_item(&self.store, GAME_STATE_KEY, state).await {
            Ok(()) => {
                log::info!(
                    "Saved game state: Score={}, GameOver={}",
                    state.score,
                    state.game_over
                );
                true
            }
            Err(e) => {
                log::error!("Failed to save game state: {}", e);
                false
            }
        }
    }

    pub async fn clear(&self) {
        match self.store.remove(GAME_STATE_KEY).await {
            Ok(()) => log::info!("Cleared game state"),
            Err(e) => log::error!("Failed to clear game state: {}", e),
        }
    }
}
