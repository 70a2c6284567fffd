//! Transcript tests for the terminal session loops.

use cats_game::{GameState, Mark};
use cats_game_cli::{Settings, run_interactive, run_replay};
use std::io::Write;

fn transcript(input: &str) -> (GameState, String) {
    let mut game = GameState::new();
    let mut out = Vec::new();
    run_interactive(&mut game, &Settings::default(), input.as_bytes(), &mut out).unwrap();
    (game, String::from_utf8(out).unwrap())
}

#[test]
fn test_opening_board_and_prompt() {
    let (_, out) = transcript("");
    assert_eq!(out, "_ _ _\n_ _ _\n_ _ _\nX's turn\n");
}

#[test]
fn test_move_updates_board_and_prompt() {
    let (game, out) = transcript("1 1\n");
    assert_eq!(game.marks_placed(), 1);
    assert!(out.ends_with("_ _ _\n_ X _\n_ _ _\nO's turn\n"));
}

#[test]
fn test_rejected_moves_are_reported_and_ignored() {
    let (game, out) = transcript("0,0\n0,0\n5 5\nnonsense\n");
    assert_eq!(game.marks_placed(), 1);
    assert_eq!(game.turn(), Mark::O);
    assert_eq!(out.matches("Invalid move.").count(), 2);
    assert!(out.contains("got `nonsense`"));
}

#[test]
fn test_win_shows_winner_and_line() {
    let (game, out) = transcript("0 0\n0 1\n1 1\n0 2\n2 2\n1 0\n");
    assert!(game.is_over());
    assert!(out.contains("X O O\n_ X _\n_ _ X\nX won the game!\n"));
    assert!(out.contains("Winning line: (0,0) (1,1) (2,2)"));
    // The move after the win is refused.
    assert!(out.trim_end().ends_with("Invalid move."));
}

#[test]
fn test_draw_shows_cats() {
    let (game, out) = transcript("0,0\n0,2\n0,1\n1,0\n1,2\n1,1\n2,0\n2,1\n2,2\n");
    assert!(game.is_over());
    assert_eq!(game.winning_line(), None);
    assert!(out.ends_with("Cats!\n"));
    assert!(!out.contains("Winning line"));
}

#[test]
fn test_reset_and_quit() {
    let (game, out) = transcript("0 0\nreset\nquit\n2 2\n");
    assert_eq!(game, GameState::new());
    assert!(out.ends_with("_ _ _\n_ _ _\n_ _ _\nX's turn\n"));
}

#[test]
fn test_replay_with_history_and_custom_glyph() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "empty_glyph = \".\"\nshow_history = true").unwrap();
    let settings = Settings::from_file(file.path()).unwrap();

    let mut game = GameState::new();
    let mut out = Vec::new();
    let moves = [(2, 0), (0, 0), (2, 0), (1, 1), (0, 1), (0, 2)];
    run_replay(&mut game, &settings, &moves, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with("Invalid move 2,0: Cell (2,0) is already occupied\n"));
    assert!(out.contains("O O X\n. X .\nX . .\nX won the game!\n"));
    assert!(out.contains("Winning line: (2,0) (1,1) (0,2)"));
    assert!(out.contains("Moves: X -> (2,0), O -> (0,0), X -> (1,1), O -> (0,1), X -> (0,2)"));
}
