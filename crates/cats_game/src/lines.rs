//! Winning lines and win detection.

use super::coord::Coord;
use super::types::{Board, Mark};
use serde::Serialize;
use tracing::instrument;

/// Which of the eight lines a [`WinningLine`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum LineKind {
    /// A row, 0 (top) to 2 (bottom).
    #[display("row {}", _0)]
    Row(u8),
    /// A column, 0 (left) to 2 (right).
    #[display("column {}", _0)]
    Column(u8),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Bottom-left to top-right.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Three cells that win the game when they all hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine {
    kind: LineKind,
    coords: [Coord; 3],
}

impl WinningLine {
    const fn new(kind: LineKind, coords: [Coord; 3]) -> Self {
        Self { kind, coords }
    }

    /// Which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three coordinates of the line.
    pub fn coords(&self) -> [Coord; 3] {
        self.coords
    }

    /// Checks whether `coord` lies on this line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// Returns the shared mark if all three cells hold it.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.coords.map(|coord| board.get(coord));
        match a.mark() {
            Some(mark) if a == b && b == c => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.coords;
        write!(f, "{} {} {} {}", self.kind, a, b, c)
    }
}

/// The eight winning lines: rows top-to-bottom, columns left-to-right,
/// then the two diagonals.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new(LineKind::Row(0), [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)]),
    WinningLine::new(LineKind::Row(1), [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)]),
    WinningLine::new(LineKind::Row(2), [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)]),
    // Columns
    WinningLine::new(LineKind::Column(0), [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)]),
    WinningLine::new(LineKind::Column(1), [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)]),
    WinningLine::new(LineKind::Column(2), [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)]),
    // Diagonals
    WinningLine::new(LineKind::Diagonal, [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)]),
    WinningLine::new(LineKind::AntiDiagonal, [Coord::at(2, 0), Coord::at(1, 1), Coord::at(0, 2)]),
];

/// Finds a completed line on the board.
///
/// All eight lines are checked. When more than one is complete the
/// last one in [`LINES`] order is returned.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    LINES
        .iter()
        .rev()
        .find(|line| line.owner(board).is_some())
        .copied()
}
