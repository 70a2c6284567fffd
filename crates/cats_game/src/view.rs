//! What a presentation layer shows for a given state.
//!
//! Nothing here draws anything. A front end turns the [`Prompt`] into
//! its status line and highlights the [`highlighted`] cells.

use super::coord::Coord;
use super::state::{GameState, GameStatus};
use super::types::Mark;
use serde::Serialize;

/// Status line for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Prompt {
    /// Game in progress; this mark moves next.
    #[display("{}'s turn", _0)]
    Turn(Mark),
    /// Game won by this mark.
    #[display("{} won the game!", _0)]
    Won(Mark),
    /// Board full with no winner.
    #[display("Cats!")]
    Cats,
}

impl From<&GameState> for Prompt {
    fn from(game: &GameState) -> Self {
        match game.status() {
            GameStatus::InProgress => Prompt::Turn(game.turn()),
            GameStatus::Won { winner, .. } => Prompt::Won(winner),
            GameStatus::Draw => Prompt::Cats,
        }
    }
}

/// Cells to highlight: the winning line, or nothing.
pub fn highlighted(game: &GameState) -> Vec<Coord> {
    game.winning_line()
        .map(|line| line.coords().to_vec())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_texts() {
        assert_eq!(Prompt::Turn(Mark::O).to_string(), "O's turn");
        assert_eq!(Prompt::Won(Mark::X).to_string(), "X won the game!");
        assert_eq!(Prompt::Cats.to_string(), "Cats!");
    }

    #[test]
    fn test_prompt_follows_game() {
        let mut game = GameState::new();
        assert_eq!(Prompt::from(&game), Prompt::Turn(Mark::X));
        game.attempt_move(0, 0);
        assert_eq!(Prompt::from(&game), Prompt::Turn(Mark::O));
        assert!(highlighted(&game).is_empty());
    }

    #[test]
    fn test_highlight_after_win() {
        let mut game = GameState::new();
        for (row, col) in [(2, 0), (0, 0), (2, 1), (0, 1), (2, 2)] {
            game.attempt_move(row, col);
        }
        assert_eq!(Prompt::from(&game), Prompt::Won(Mark::X));
        let cells: Vec<_> = highlighted(&game).iter().map(|c| (c.row(), c.col())).collect();
        assert_eq!(cells, vec![(2, 0), (2, 1), (2, 2)]);
    }
}
