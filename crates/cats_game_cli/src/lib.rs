//! Terminal front end for the cats_game engine.
//!
//! Owns one [`cats_game::GameState`] per run and forwards typed moves
//! into it. All rule decisions stay in the engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use session::{
    Input, ParseMoveError, parse_input, parse_move, parse_moves, run_interactive, run_replay,
    write_board, write_game_over,
};
