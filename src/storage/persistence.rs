//! Background persistence fed by a session's event channel.
//!
//! Runs strictly after moves complete: it only ever sees events the session
//! has already emitted and never holds the board.

use crate::game::score::HighScore;
use crate::services::game_session::GameEvent;
use crate::storage::game_state_store::GameStateStore;
use crate::storage::key_value::KeyValueStore;
use crate::storage::score_store::ScoreStore;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistenceSummary {
    pub states_saved: usize,
    pub merges_seen: usize,
    pub high_score: Option<HighScore>,
}

#[derive(Debug, Clone)]
pub struct PersistenceWorker<S> {
    states: GameStateStore<S>,
    scores: ScoreStore<S>,
}

impl<S> PersistenceWorker<S>
where
    S: KeyValueStore + Clone + 'static,
{
    pub fn new(store: S) -> Self {
        PersistenceWorker {
            states: GameStateStore::new(store.clone()),
            scores: ScoreStore::new(store),
        }
    }

    /// Drain `events` until every sender is dropped.
    pub async fn run(self, mut events: UnboundedReceiver<GameEvent>) -> PersistenceSummary {
        let mut summary = PersistenceSummary::default();

        while let Some(event) = events.recv().await {
            match event {
                GameEvent::TileMerged(merge) => {
                    summary.merges_seen += 1;
                    log::debug!(
                        "Tile merged event received: {} -> {} at {}",
                        merge.old_value,
                        merge.new_value,
                        merge.position
                    );
                }
                GameEvent::StateChanged(state) => {
                    if self.states.save(&state).await {
                        summary.states_saved += 1;
                    }
                    if let Some(high) = self.scores.save_high_score(state.score).await {
                        summary.high_score = Some(high);
                    }
                }
            }
        }

        log::info!(
            "Persistence finished: {} states saved, {} merges seen",
            summary.states_saved,
            summary.merges_seen
        );
        summary
    }

    pub fn spawn(self, events: UnboundedReceiver<GameEvent>) -> JoinHandle<PersistenceSummary> {
        tokio::spawn(self.run(events))
    }
}
