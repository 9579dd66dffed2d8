//! Terminal configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_xiangqi::{CheckmateRule, GameConfig};
use tracing::{debug, info, instrument};

/// Character set used to draw pieces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Glyphs {
    /// Side letter then kind letter, e.g. `rR`.
    #[default]
    #[display("letters")]
    Letters,
    /// Traditional characters, e.g. `俥`.
    #[display("chinese")]
    Chinese,
}

/// How the board is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Piece character set.
    glyphs: Glyphs,

    /// Color Red pieces with ANSI escapes.
    color: bool,
}

impl DisplayConfig {
    /// Creates a display configuration.
    pub fn new(glyphs: Glyphs, color: bool) -> Self {
        Self { glyphs, color }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::Letters,
            color: true,
        }
    }
}

/// Configuration for the terminal driver.
///
/// ```toml
/// [rules]
/// checkmate_rule = "complete"
///
/// [display]
/// glyphs = "chinese"
/// color = false
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Rule settings handed to the engine.
    rules: GameConfig,

    /// Board presentation.
    display: DisplayConfig,
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            checkmate_rule = %config.rules.checkmate_rule,
            glyphs = %config.display.glyphs,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the checkmate rule when an override is given.
    pub fn with_rule_override(mut self, rule: Option<CheckmateRule>) -> Self {
        if let Some(rule) = rule {
            self.rules = self.rules.with_checkmate_rule(rule);
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
