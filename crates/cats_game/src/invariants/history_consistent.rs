//! History consistency invariant: the move log matches the board.

use super::Invariant;
use crate::{Cell, GameState};

/// Invariant: one history entry per marked cell, and every entry's
/// cell holds the entry's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history.len() == game.board().marked_count()
            && history
                .iter()
                .all(|mov| game.board().get(mov.coord) == Cell::Marked(mov.mark))
    }

    fn description() -> &'static str {
        "Move history is consistent with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Mark};

    #[test]
    fn test_holds_after_reset() {
        let mut game = GameState::new();
        game.attempt_move(2, 1);
        game.reset();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_detects_overwritten_cell() {
        let mut game = GameState::new();
        game.attempt_move(2, 1);
        game.board.place(Coord::new(2, 1).unwrap(), Mark::O);
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
