//! Core domain types for tic-tac-toe.

use super::coord::Coord;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Glyph for this cell, using `empty` for unmarked cells.
    pub fn glyph(self, empty: char) -> char {
        match self {
            Cell::Empty => empty,
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are only written by [`GameState`](crate::GameState): a cell
/// is marked once and cleared only when the whole board is reset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Checks if the cell at the given coordinate is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Coordinates of the unmarked cells, in row-major order.
    #[instrument(skip(self))]
    pub fn empty_coords(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|coord| self.is_empty(*coord))
            .collect()
    }

    /// Renders the board as three lines of glyphs separated by spaces.
    pub fn render(&self, empty_glyph: char) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                result.push(self.cells[row * 3 + col].glyph(empty_glyph));
                if col < 2 {
                    result.push(' ');
                }
            }
            if row < 2 {
                result.push('\n');
            }
        }
        result
    }

    pub(crate) fn place(&mut self, coord: Coord, mark: Mark) {
        self.cells[coord.index()] = Cell::Marked(mark);
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render('_'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        for mark in Mark::iter() {
            assert_ne!(mark.opponent(), mark);
            assert_eq!(mark.opponent().opponent(), mark);
        }
    }

    #[test]
    fn test_cell_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::Marked(Mark::O).mark(), Some(Mark::O));
        assert_eq!(Cell::Marked(Mark::X).glyph('_'), 'X');
        assert_eq!(Cell::default().glyph('.'), '.');
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.marked_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_coords().len(), 9);
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        let center = Coord::ALL[4];
        board.place(center, Mark::O);
        assert_eq!(board.get(center), Cell::Marked(Mark::O));
        assert_eq!(board.marked_count(), 1);
        assert!(!board.empty_coords().contains(&center));

        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_render() {
        let mut board = Board::new();
        board.place(Coord::ALL[0], Mark::X);
        board.place(Coord::ALL[4], Mark::O);
        assert_eq!(board.to_string(), "X _ _\n_ O _\n_ _ _");
        assert_eq!(board.render('.'), "X . .\n. O .\n. . .");
    }
}
