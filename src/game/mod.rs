pub mod board;
pub mod constants;
pub mod direction;
pub mod game_state;
pub mod input;
pub mod merge_line;
pub mod move_result;
pub mod position;
pub mod random;
pub mod score;
pub mod tile;

pub use board::Board;
pub use direction::Direction;
pub use game_state::GameState;
pub use merge_line::{merge_line, Line, LineMerge};
pub use move_result::{MoveResult, TileMerged};
pub use position::Position;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use score::{HighScore, Score};
pub use tile::Tile;
