//! Terminal driver for the strictly_xiangqi rules engine.
//!
//! Parses command-line arguments and prompt lines, loads the TOML
//! configuration and draws the board. All rules live in the engine crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod render;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError, DisplayConfig, Glyphs};
pub use input::{HELP, PromptCommand};
pub use render::{render_board, render_status};
