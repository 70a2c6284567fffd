//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: marks alternate starting with X.
///
/// While the game is in progress the mark to move follows from the
/// number of moves made; once it is over, `turn` is the mark that
/// made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.mark == if i % 2 == 0 { Mark::X } else { Mark::O });
        if !alternates {
            return false;
        }

        if game.is_over() {
            history.last().is_some_and(|mov| mov.mark == game.turn())
        } else {
            let expected = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
            game.turn() == expected
        }
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...)"
    }
}
