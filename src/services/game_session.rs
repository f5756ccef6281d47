// src/services/game_session.rs - Board + derived state, with change notifications

use crate::commands::MoveCommand;
use crate::game::board::Board;
use crate::game::direction::Direction;
use crate::game::game_state::GameState;
use crate::game::move_result::{MoveResult, TileMerged};
use crate::game::random::RandomSource;
use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::mpsc;

// ============================================================================
// EVENTS AND OBSERVERS
// ============================================================================

/// Notifications raised by a session. For a single move every `TileMerged`
/// is delivered before the `StateChanged` it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TileMerged(TileMerged),
    StateChanged(GameState),
}

pub trait GameObserver: Send {
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

// ============================================================================
// GAME SESSION
// ============================================================================

/// Single-writer owner of the live board.
///
/// Score is recomputed from the board (sum of all tile values) after each
/// successful move rather than accumulated from merge gains.
pub struct GameSession {
    board: Board,
    state: GameState,
    random: Box<dyn RandomSource>,
    observers: Vec<Box<dyn GameObserver>>,
    disposed: bool,
}

impl GameSession {
    /// Start a fresh game: two random tiles, score 0.
    pub fn new(mut random: Box<dyn RandomSource>) -> Result<Self> {
        let board = Board::new(&mut *random)?;
        Ok(GameSession {
            board,
            state: GameState::INITIAL,
            random,
            observers: Vec::new(),
            disposed: false,
        })
    }

    /// Resume from an existing board; the state is derived from its tiles.
    pub fn from_board(board: Board, random: Box<dyn RandomSource>) -> Self {
        let state = GameState {
            score: board.total_value(),
            game_over: board.is_game_over(),
        };
        GameSession {
            board,
            state,
            random,
            observers: Vec::new(),
            disposed: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn subscribe<O: GameObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Forward every event into an unbounded channel, e.g. for a
    /// persistence task running on the tokio runtime.
    pub fn event_channel(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribe(move |event: &GameEvent| {
            if sender.send(event.clone()).is_err() {
                log::debug!("Event receiver dropped, discarding {:?}", event);
            }
        });
        receiver
    }

    /// Play one move. A move on a finished game, a move that changes nothing
    /// and a move that failed internally all return `moved == false`.
    pub fn move_direction(&mut self, direction: Direction) -> Result<MoveResult> {
        self.ensure_live()?;
        if self.state.game_over {
            return Ok(MoveResult::no_move());
        }

        log::info!("Attempting move in direction: {}", direction);

        let result = match MoveCommand::new(direction).execute(&mut self.board, &mut *self.random) {
            Ok(result) => result,
            Err(e) => {
                log::error!("Error during move operation: {}", e);
                return Ok(MoveResult::no_move());
            }
        };

        if !result.moved {
            return Ok(result);
        }

        for event in &result.merge_events {
            self.emit(&GameEvent::TileMerged(*event));
        }
        self.update_state();

        Ok(result)
    }

    /// Like [`GameSession::move_direction`], from a direction name such as
    /// `"left"`. Unknown names are logged and ignored.
    pub fn move_named(&mut self, name: &str) -> Result<MoveResult> {
        self.ensure_live()?;
        match name.parse::<Direction>() {
            Ok(direction) => self.move_direction(direction),
            Err(e) => {
                log::warn!("Invalid direction input: {}", e);
                Ok(MoveResult::no_move())
            }
        }
    }

    /// What `direction` would do, without touching the live board.
    pub fn preview(&self, direction: Direction) -> Result<MoveResult> {
        self.ensure_live()?;
        MoveCommand::new(direction).preview(&self.board)
    }

    pub fn available_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.board.can_move(direction))
            .collect()
    }

    pub fn restart(&mut self) -> Result<()> {
        self.ensure_live()?;
        log::info!("Restarting game");

        self.board = Board::new(&mut *self.random)?;
        self.state = GameState::INITIAL;
        self.state_changed();
        Ok(())
    }

    /// Drop all observers; every later call fails with `SessionDisposed`.
    pub fn dispose(&mut self) {
        self.observers.clear();
        self.disposed = true;
    }

    fn ensure_live(&self) -> Result<()> {
        if self.disposed {
            return Err(GameError::SessionDisposed);
        }
        Ok(())
    }

    fn update_state(&mut self) {
        let next = GameState {
            score: self.board.total_value(),
            game_over: self.board.is_game_over(),
        };

        if next != self.state {
            self.state = next;
            self.state_changed();
        }
    }

    fn state_changed(&mut self) {
        log::info!(
            "Game state changed. Score: {}, GameOver: {}",
            self.state.score,
            self.state.game_over
        );
        let event = GameEvent::StateChanged(self.state);
        self.emit(&event);
    }

    fn emit(&mut self, event: &GameEvent) {
        for observer in self.observers.iter_mut() {
            observer.notify(event);
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::random::ScriptedRandom;
    use crate::game::score::Score;
    use assert_matches::assert_matches;
    use std::sync::{Arc, Mutex};

    fn session(values: [[u32; 4]; 4], script: Vec<usize>) -> GameSession {
        let board = Board::from_values(&values).unwrap();
        GameSession::from_board(board, Box::new(ScriptedRandom::new(script)))
    }

    fn recorder(session: &mut GameSession) -> Arc<Mutex<Vec<GameEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        session.subscribe(move |event: &GameEvent| sink.lock().unwrap().push(event.clone()));
        events
    }

    #[test]
    fn test_new_session_starts_clean() {
        let session = GameSession::new(Box::new(ScriptedRandom::new([0, 0, 0, 0]))).unwrap();
        assert_eq!(session.state(), GameState::INITIAL);
        assert_eq!(session.board().empty_positions().len(), 14);
    }

    #[test]
    fn test_score_is_sum_of_tiles() {
        let mut session = session(
            [[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            vec![0, 0],
        );
        let result = session.move_direction(Direction::Left).unwrap();
        assert!(result.moved);
        assert_eq!(result.score_gained, Score(4));
        // merged 4 plus a spawned 2
        assert_eq!(session.state().score, Score(6));
        assert!(!session.state().game_over);
    }

    #[test]
    fn test_merge_events_precede_state_change() {
        let mut session = session(
            [[2, 2, 4, 4], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            vec![0, 0],
        );
        let events = recorder(&mut session);
        session.move_direction(Direction::Left).unwrap();

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert_matches!(events[0], GameEvent::TileMerged(TileMerged { new_value: 4, .. }));
        assert_matches!(events[1], GameEvent::TileMerged(TileMerged { new_value: 8, .. }));
        assert_matches!(events[2], GameEvent::StateChanged(GameState { score: Score(14), .. }));
    }

    #[test]
    fn test_no_op_move_emits_nothing() {
        let mut session = session(
            [[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            vec![],
        );
        let events = recorder(&mut session);
        let before = session.board().clone();

        let result = session.move_direction(Direction::Left).unwrap();
        assert!(!result.moved);
        assert_eq!(session.board(), &before);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_overflowing_merge_is_reported_as_no_move() {
        let mut session = session(
            [[1 << 31, 1 << 31, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            vec![],
        );
        let events = recorder(&mut session);
        let before = session.board().clone();

        let result = session.move_direction(Direction::Left).unwrap();
        assert_eq!(result, MoveResult::no_move());
        assert_eq!(session.board(), &before);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_move_ignored_after_game_over() {
        let mut session = session(
            [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]],
            vec![],
        );
        assert!(session.state().game_over);
        for direction in Direction::ALL {
            assert!(!session.move_direction(direction).unwrap().moved);
        }
        assert!(session.available_directions().is_empty());
    }

    #[test]
    fn test_full_board_with_one_merge_plays_on() {
        // the spawned 4 lands beside the slid 4, so another merge opens up
        let mut session = session(
            [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]],
            vec![0, 99],
        );
        let events = recorder(&mut session);
        assert!(session.move_direction(Direction::Right).unwrap().moved);
        assert_eq!(session.board().values()[3], [4, 4, 2, 16]);
        assert!(!session.state().game_over);

        assert!(session.move_direction(Direction::Left).unwrap().moved);
        assert!(events.lock().unwrap().len() >= 4);
    }

    #[test]
    fn test_restart_resets_state() {
        let mut session = session(
            [[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            vec![],
        );
        let events = recorder(&mut session);
        session.move_direction(Direction::Left).unwrap();
        session.restart().unwrap();

        assert_eq!(session.state(), GameState::INITIAL);
        assert_eq!(session.board().empty_positions().len(), 14);
        assert_eq!(
            events.lock().unwrap().last(),
            Some(&GameEvent::StateChanged(GameState::INITIAL))
        );
    }

    #[test]
    fn test_move_named() {
        let mut session = session(
            [[0, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            vec![],
        );
        assert!(!session.move_named("sideways").unwrap().moved);
        assert!(session.move_named("LEFT").unwrap().moved);
    }

    #[test]
    fn test_disposed_session_rejects_calls() {
        let mut session = session(
            [[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            vec![],
        );
        session.dispose();
        assert!(session.is_disposed());
        assert_matches!(session.move_direction(Direction::Left), Err(GameError::SessionDisposed));
        assert_matches!(session.move_named("left"), Err(GameError::SessionDisposed));
        assert_matches!(session.restart(), Err(GameError::SessionDisposed));
        assert_matches!(session.preview(Direction::Left), Err(GameError::SessionDisposed));
    }

    #[test]
    fn test_event_channel_receives_events() {
        let mut session = session(
            [[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            vec![],
        );
        let mut receiver = session.event_channel();
        session.move_direction(Direction::Left).unwrap();

        assert_matches!(receiver.try_recv(), Ok(GameEvent::TileMerged(_)));
        assert_matches!(receiver.try_recv(), Ok(GameEvent::StateChanged(_)));
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_preview_leaves_session_alone() {
        let session = session(
            [[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            vec![],
        );
        let before = session.board().clone();
        let result = session.preview(Direction::Left).unwrap();
        assert_eq!(result.score_gained, Score(4));
        assert_eq!(session.board(), &before);
        assert_eq!(session.state().score, Score(4));
    }
}
