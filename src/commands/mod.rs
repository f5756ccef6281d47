// Directional move commands over a board

pub mod move_command;

pub use move_command::{all_commands, MoveCommand};
