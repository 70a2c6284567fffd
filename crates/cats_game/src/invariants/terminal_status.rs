//! Terminal status invariant: `is_over` and `winning_line` agree with
//! the board.

use super::Invariant;
use crate::GameState;
use crate::lines::find_winning_line;

/// Invariant: the game is over exactly when a line is complete or the
/// board is full, and a winning line is recorded only for a won game,
/// owned by the mark in `turn`.
pub struct TerminalStatusInvariant;

impl Invariant<GameState> for TerminalStatusInvariant {
    fn holds(game: &GameState) -> bool {
        let completed = find_winning_line(game.board());
        let should_be_over = completed.is_some() || game.marks_placed() == 9;
        if game.is_over() != should_be_over {
            return false;
        }

        match game.winning_line() {
            None => completed.is_none(),
            Some(line) => game.is_over() && line.owner(game.board()) == Some(game.turn()),
        }
    }

    fn description() -> &'static str {
        "Game is over iff a line is complete or the board is full; the winning line belongs to the winner"
    }
}
