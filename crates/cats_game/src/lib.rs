//! Tic-tac-toe game state machine.
//!
//! [`GameState`] owns a 3x3 [`Board`], the mark to move, the move count
//! and the terminal status. Front ends call [`GameState::attempt_move`]
//! (or [`GameState::try_move`] for the reason behind a rejection) and
//! read the observations back; they hold no rules of their own.
//!
//! # Example
//!
//! ```
//! use cats_game::{GameState, Mark, Prompt};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
//!     assert!(game.attempt_move(row, col));
//! }
//! assert!(game.is_over());
//! assert_eq!(game.turn(), Mark::X);
//! assert_eq!(Prompt::from(&game).to_string(), "X won the game!");
//! assert!(!game.attempt_move(2, 0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coord;
pub mod invariants;
mod lines;
mod state;
mod types;
mod view;

pub use action::{Move, MoveOutcome, MoveRejection};
pub use coord::Coord;
pub use lines::{LINES, LineKind, WinningLine, find_winning_line};
pub use state::{GameState, GameStatus};
pub use types::{Board, Cell, Mark};
pub use view::{Prompt, highlighted};
