//! Board coordinates.

use serde::Serialize;
use tracing::instrument;

/// A cell address `(row, col)`, always inside `[0,2]×[0,2]`.
///
/// The only way to obtain a `Coord` from untrusted input is
/// [`Coord::new`], so every `Coord` in circulation indexes the board
/// without bounds checks failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Validates a coordinate pair.
    ///
    /// Returns `None` when either component is negative or greater than 2.
    #[instrument]
    pub fn new(row: i64, col: i64) -> Option<Self> {
        let in_range = |n: i64| (0..3).contains(&n);
        if in_range(row) && in_range(col) {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Creates a coordinate from a row-major index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row, 0 (top) to 2 (bottom).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column, 0 (left) to 2 (right).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        let coord = Coord::new(2, 1).unwrap();
        assert_eq!(coord.row(), 2);
        assert_eq!(coord.col(), 1);
        assert_eq!(coord.index(), 7);
    }

    #[test]
    fn test_new_out_of_range() {
        for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i64::MIN, i64::MAX)] {
            assert_eq!(Coord::new(row, col), None, "({row},{col}) should be rejected");
        }
    }

    #[test]
    fn test_index_roundtrip_matches_all() {
        for (index, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!(coord.index(), index);
            assert_eq!(Coord::from_index(index), Some(*coord));
        }
        assert_eq!(Coord::from_index(9), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::ALL[5].to_string(), "(1,2)");
    }
}
