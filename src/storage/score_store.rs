//! Best score across sessions.

use crate::game::score::{HighScore, Score};
use crate::storage::key_value::{get_item, set_item, KeyValueStore};

pub const HIGH_SCORE_KEY: &str = "highScore";

#[derive(Debug, Clone)]
pub struct ScoreStore<S> {
    store: S,
}

impl<S: KeyValueStore> ScoreStore<S> {
    pub fn new(store: S) -> Self {
        ScoreStore { store }
    }

    pub async fn high_score(&self) -> Option<HighScore> {
        match get_item::<HighScore, _>(&self.store, HIGH_SCORE_KEY).await {
            Ok(high) => high,
            Err(e) => {
                log::error!("Error retrieving high score: {}", e);
                None
            }
        }
    }

    /// Record `score` if it beats the stored best. Returns the new record
    /// when one was written.
    pub async fn save_high_score(&self, score: Score) -> Option<HighScore> {
        if let Some(current) = self.high_score().await {
            if current.value >= score {
                return None;
            }
        }

        let high = HighScore::create(score);
        match set_item(&self.store, HIGH_SCORE_KEY, &high).await {
            Ok(()) => {
                log::info!("New high score saved: {}", score);
                Some(high)
            }
            Err(e) => {
                log::error!("Error saving high score: {}", e);
                None
            }
        }
    }
}
