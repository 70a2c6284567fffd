//! Drives a single [`GameState`] from text input.
//!
//! The loops are generic over their reader and writer so the binary
//! passes stdin/stdout and tests pass byte buffers.

use crate::config::Settings;
use anyhow::Result;
use cats_game::{GameState, Prompt, highlighted};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Input that is not a move, `reset` or `quit`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Expected `row col` or `row,col`, got `{}`", input)]
pub struct ParseMoveError {
    /// The offending input.
    pub input: String,
}

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Attempt a move at `(row, col)`.
    Move(i64, i64),
    /// Start a new game.
    Reset,
    /// Leave the session.
    Quit,
}

/// Parses a move written as `row col` or `row,col`.
#[instrument]
pub fn parse_move(text: &str) -> Result<(i64, i64), ParseMoveError> {
    let error = || ParseMoveError {
        input: text.to_string(),
    };
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => Ok((
            row.parse().map_err(|_| error())?,
            col.parse().map_err(|_| error())?,
        )),
        _ => Err(error()),
    }
}

/// Parses a script of space-separated `row,col` moves.
#[instrument]
pub fn parse_moves(script: &str) -> Result<Vec<(i64, i64)>, ParseMoveError> {
    script.split_whitespace().map(parse_move).collect()
}

/// Parses one line of interactive input.
#[instrument]
pub fn parse_input(line: &str) -> Result<Input, ParseMoveError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "reset" => Ok(Input::Reset),
        "quit" | "exit" => Ok(Input::Quit),
        other => parse_move(other).map(|(row, col)| Input::Move(row, col)),
    }
}

/// Writes the board and status line.
pub fn write_board<W: Write>(game: &GameState, settings: &Settings, out: &mut W) -> Result<()> {
    writeln!(out, "{}", game.board().render(*settings.empty_glyph()))?;
    writeln!(out, "{}", Prompt::from(game))?;
    Ok(())
}

/// Writes the end-of-game details: winning line and, if enabled, the moves.
pub fn write_game_over<W: Write>(game: &GameState, settings: &Settings, out: &mut W) -> Result<()> {
    let line = highlighted(game);
    if !line.is_empty() {
        let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
        writeln!(out, "Winning line: {}", cells.join(" "))?;
    }
    if *settings.show_history() {
        let moves: Vec<String> = game.history().iter().map(ToString::to_string).collect();
        writeln!(out, "Moves: {}", moves.join(", "))?;
    }
    Ok(())
}

/// Runs an interactive session until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_interactive<R: BufRead, W: Write>(
    game: &mut GameState,
    settings: &Settings,
    input: R,
    out: &mut W,
) -> Result<()> {
    info!("Starting interactive session");
    write_board(game, settings, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_input(&line) {
            Ok(Input::Move(row, col)) => match game.try_move(row, col) {
                Ok(outcome) => {
                    write_board(game, settings, out)?;
                    if outcome.is_terminal() {
                        write_game_over(game, settings, out)?;
                    }
                }
                Err(rejection) => {
                    debug!(%rejection, "Ignoring rejected move");
                    writeln!(out, "Invalid move.")?;
                }
            },
            Ok(Input::Reset) => {
                game.reset();
                write_board(game, settings, out)?;
            }
            Ok(Input::Quit) => break,
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    info!(marks_placed = game.marks_placed(), "Session ended");
    Ok(())
}

/// Applies `moves` in order, reporting rejected ones, then writes the result.
#[instrument(skip(game, settings, out))]
pub fn run_replay<W: Write>(
    game: &mut GameState,
    settings: &Settings,
    moves: &[(i64, i64)],
    out: &mut W,
) -> Result<()> {
    for &(row, col) in moves {
        if let Err(rejection) = game.try_move(row, col) {
            debug!(%rejection, "Skipping rejected move");
            writeln!(out, "Invalid move {},{}: {}", row, col, rejection)?;
        }
    }

    write_board(game, settings, out)?;
    if game.is_over() {
        write_game_over(game, settings, out)?;
    }
    Ok(())
}
