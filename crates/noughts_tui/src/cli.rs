//! Command-line interface for the noughts terminal game.

use clap::Parser;
use noughts::Starter;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
///
/// Leave the second player blank to play the computer.
#[derive(Parser, Debug, Default)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// First player's name
    #[arg(long)]
    pub player_one: Option<String>,

    /// Second player's name (blank plays the computer)
    #[arg(long)]
    pub player_two: Option<String>,

    /// Who opens each round: one or two
    #[arg(long)]
    pub starter: Option<Starter>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds the result stays on screen before the board clears
    #[arg(long)]
    pub cooldown_ms: Option<u64>,

    /// File that receives log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
