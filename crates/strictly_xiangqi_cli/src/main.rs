//! Strictly Xiangqi - terminal driver
//!
//! Interactive play and move-list replay on top of the rules engine.

#![warn(missing_docs)]

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{BufRead, Write};
use strictly_xiangqi::{Game, Move};
use strictly_xiangqi_cli::{
    Cli, CliConfig, Command, HELP, PromptCommand, render_board, render_status,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load_or_default(&cli.config)?.with_rule_override(cli.checkmate_rule);
    info!(?config, "Configuration ready");

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves } => run_replay(&config, &moves),
    }
}

/// Interactive loop over standard input.
#[instrument(skip(config))]
fn run_play(config: &CliConfig) -> Result<()> {
    let mut game = Game::with_config(*config.rules());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("{}", render_board(game.board(), config.display()));
    println!("{}", render_status(&game));
    println!("Type `help` for commands.");

    loop {
        print!("{}> ", game.turn());
        stdout.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            info!("Input closed");
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<PromptCommand>() {
            Ok(PromptCommand::Quit) => return Ok(()),
            Ok(PromptCommand::Help) => println!("{HELP}"),
            Ok(PromptCommand::Board) => {
                println!("{}", render_board(game.board(), config.display()));
                println!("{}", render_status(&game));
            }
            Ok(PromptCommand::Move(action)) => match game.make_move(action.from, action.to) {
                Ok(report) => {
                    println!("{report}");
                    println!("{}", render_board(game.board(), config.display()));
                    println!("{}", render_status(&game));
                    if report.is_checkmate() {
                        return Ok(());
                    }
                }
                Err(err) => {
                    warn!(%action, %err, "Move rejected");
                    println!("Rejected: {err}");
                }
            },
            Err(err) => println!("{err}. Type `help` for commands."),
        }
    }
}

/// Applies `moves` from the opening, printing each narration.
#[instrument(skip(config))]
fn run_replay(config: &CliConfig, moves: &[String]) -> Result<()> {
    let mut game = Game::with_config(*config.rules());
    for (index, text) in moves.iter().enumerate() {
        let action: Move = text
            .parse()
            .with_context(|| format!("Move {} ({text:?}) is not a move", index + 1))?;
        match game.make_move(action.from, action.to) {
            Ok(report) => println!("{report}"),
            Err(err) => {
                println!("{}", render_board(game.board(), config.display()));
                bail!("Move {} ({action}) rejected: {err}", index + 1);
            }
        }
    }
    println!("{}", render_board(game.board(), config.display()));
    println!("{}", render_status(&game));
    Ok(())
}
