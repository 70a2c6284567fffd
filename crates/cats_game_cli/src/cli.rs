//! Command-line interface for cats_game.

use clap::{Parser, Subcommand};

/// Cats Game - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "cats_game")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it is missing)
    #[arg(short, long, default_value = "cats_game.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading `row col` moves from stdin
    Play,

    /// Apply a scripted list of moves and print the result
    Replay {
        /// Space-separated `row,col` moves, X first (e.g. "0,0 1,1 0,1")
        #[arg(short, long)]
        moves: String,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
