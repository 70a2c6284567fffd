//! Marks count invariant: the counter matches the board.

use super::Invariant;
use crate::GameState;

/// Invariant: `marks_placed` equals the number of non-empty cells.
pub struct MarksCountInvariant;

impl Invariant<GameState> for MarksCountInvariant {
    fn holds(game: &GameState) -> bool {
        usize::from(game.marks_placed()) == game.board().marked_count()
    }

    fn description() -> &'static str {
        "Marks placed equals the number of marked cells"
    }
}
