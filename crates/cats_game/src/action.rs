//! Moves and their outcomes.
//!
//! A rejected move is an ordinary result, not a fault: the state
//! machine reports why and stays exactly as it was.

use super::coord::Coord;
use super::lines::WinningLine;
use super::types::Mark;
use serde::Serialize;
use tracing::instrument;

/// An accepted move: a mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, coord: Coord) -> Self {
        Self { mark, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// The game goes on and `next` is to move.
    Continue {
        /// Mark to move next.
        next: Mark,
    },
    /// The move completed a line.
    Won {
        /// The mark that just moved.
        winner: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// The move filled the board without completing a line.
    Draw,
}

impl MoveOutcome {
    /// Checks whether the game ended with this move.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }
}

/// Why a move was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejection {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The coordinates are not on the board.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Coord),
}
