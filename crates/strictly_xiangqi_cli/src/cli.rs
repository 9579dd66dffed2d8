//! Command-line interface for strictly_xiangqi.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_xiangqi::CheckmateRule;

/// Strictly Xiangqi - contract-checked Chinese chess in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_xiangqi")]
#[command(about = "Play or replay xiangqi games in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults are used if it is missing)
    #[arg(short, long, default_value = "xiangqi.toml")]
    pub config: PathBuf,

    /// Override the configured checkmate rule (general-escape or complete)
    #[arg(long)]
    pub checkmate_rule: Option<CheckmateRule>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game, reading moves from standard input
    Play,

    /// Apply a list of moves from the opening and print the result
    Replay {
        /// Moves such as `b3e3` or `"b3 e3"`
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
