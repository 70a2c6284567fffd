//! The tic-tac-toe state machine.

use super::action::{Move, MoveOutcome, MoveRejection};
use super::coord::Coord;
use super::invariants::{GameInvariants, InvariantSet};
use super::lines::{WinningLine, find_winning_line};
use super::types::{Board, Mark};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Moves are being accepted.
    InProgress,
    /// A line was completed.
    Won {
        /// The mark that completed the line.
        winner: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// The board filled with no completed line.
    Draw,
}

/// Complete game state.
///
/// Created once and reused across games with [`GameState::reset`].
/// The owner (a UI, the CLI or a test) holds the instance; there is
/// no global game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) marks_placed: u8,
    pub(crate) is_over: bool,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a game ready for X's first move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            marks_placed: 0,
            is_over: false,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self), fields(marks_placed = self.marks_placed))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Mark::X;
        self.marks_placed = 0;
        self.is_over = false;
        self.winning_line = None;
        self.history.clear();
        debug!("Game reset");
    }

    /// Attempts to place the current mark at `(row, col)`.
    ///
    /// Returns `false`, leaving the state untouched, when the game is
    /// over, the coordinates are off the board or the cell is taken.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, row: i64, col: i64) -> bool {
        self.try_move(row, col).is_ok()
    }

    /// Attempts to place the current mark at `(row, col)`, reporting
    /// what happened.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveRejection`] describing why the move was not
    /// accepted. The state is unchanged in that case.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_move(&mut self, row: i64, col: i64) -> Result<MoveOutcome, MoveRejection> {
        // Game over is reported ahead of bad coordinates.
        if self.is_over {
            debug!("Move rejected: game is over");
            return Err(MoveRejection::GameOver);
        }
        let coord = Coord::new(row, col).ok_or_else(|| {
            debug!("Move rejected: off the board");
            MoveRejection::OutOfBounds { row, col }
        })?;
        self.play(coord)
    }

    /// Places the current mark at an already validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejection::GameOver`] or [`MoveRejection::Occupied`].
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, coord: Coord) -> Result<MoveOutcome, MoveRejection> {
        if self.is_over {
            debug!("Move rejected: game is over");
            return Err(MoveRejection::GameOver);
        }
        if !self.board.is_empty(coord) {
            debug!(%coord, "Move rejected: cell occupied");
            return Err(MoveRejection::Occupied(coord));
        }

        let mark = self.turn;
        self.board.place(coord, mark);
        self.marks_placed += 1;
        self.history.push(Move::new(mark, coord));
        debug!(%coord, %mark, marks_placed = self.marks_placed, "Move accepted");

        let outcome = self.update_status();
        self.check_invariants();
        Ok(outcome)
    }

    /// Settles the outcome of the move just placed.
    fn update_status(&mut self) -> MoveOutcome {
        if let Some(line) = find_winning_line(&self.board) {
            self.is_over = true;
            self.winning_line = Some(line);
            info!(winner = %self.turn, %line, "Game won");
            MoveOutcome::Won {
                winner: self.turn,
                line,
            }
        } else if self.marks_placed == 9 {
            self.is_over = true;
            info!("Game drawn");
            MoveOutcome::Draw
        } else {
            self.turn = self.turn.opponent();
            MoveOutcome::Continue { next: self.turn }
        }
    }

    fn check_invariants(&self) {
        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game invariants violated");
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move, or the winner once the game is won.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Number of marked cells.
    pub fn marks_placed(&self) -> u8 {
        self.marks_placed
    }

    /// Whether the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line.map(|_| self.turn)
    }

    /// Current phase of the game.
    pub fn status(&self) -> GameStatus {
        match (self.is_over, self.winning_line) {
            (false, _) => GameStatus::InProgress,
            (true, Some(line)) => GameStatus::Won {
                winner: self.turn,
                line,
            },
            (true, None) => GameStatus::Draw,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.marks_placed(), 0);
        assert!(!game.is_over());
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game, GameState::default());
    }

    #[test]
    fn test_first_move_passes_turn() {
        let mut game = GameState::new();
        let outcome = game.try_move(1, 1).unwrap();
        assert_eq!(outcome, MoveOutcome::Continue { next: Mark::O });
        assert_eq!(game.turn(), Mark::O);
        assert_eq!(game.history(), &[Move::new(Mark::X, Coord::at(1, 1))]);
    }

    #[test]
    fn test_game_over_reported_before_bounds() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.try_move(row, col).unwrap();
        }
        assert_eq!(game.try_move(7, 7), Err(MoveRejection::GameOver));
    }

    #[test]
    fn test_play_rejects_occupied() {
        let mut game = GameState::new();
        let center = Coord::at(1, 1);
        game.play(center).unwrap();
        assert_eq!(game.play(center), Err(MoveRejection::Occupied(center)));
        assert_eq!(game.turn(), Mark::O);
    }

    #[test]
    fn test_winner_only_when_won() {
        let mut game = GameState::new();
        assert_eq!(game.winner(), None);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.try_move(row, col).unwrap();
        }
        assert_eq!(game.winner(), Some(Mark::X));
    }
}
