//! Cats Game - tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use cats_game::GameState;
use cats_game_cli::{Cli, Command, Settings, parse_moves, run_interactive, run_replay};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)?;
    initialize_tracing(&settings);

    let mut game = GameState::new();
    match cli.command {
        Command::Play => run_play(&mut game, &settings),
        Command::Replay { moves, json } => replay(&mut game, &settings, &moves, json),
    }
}

/// Logs go to stderr so stdout only carries the game.
fn initialize_tracing(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip_all)]
fn run_play(game: &mut GameState, settings: &Settings) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_interactive(game, settings, stdin.lock(), &mut stdout)
}

#[instrument(skip(game, settings))]
fn replay(game: &mut GameState, settings: &Settings, moves: &str, json: bool) -> Result<()> {
    let moves = parse_moves(moves).context("Invalid move script")?;
    info!(count = moves.len(), "Replaying moves");

    if json {
        // Human-readable report to stderr, JSON alone on stdout.
        run_replay(game, settings, &moves, &mut std::io::stderr())?;
        println!("{}", serde_json::to_string_pretty(game)?);
        Ok(())
    } else {
        run_replay(game, settings, &moves, &mut std::io::stdout())
    }
}
