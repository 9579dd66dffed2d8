//! Rule configuration.

use serde::{Deserialize, Serialize};

/// How checkmate is decided after each move.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CheckmateRule {
    /// Only the General's own steps are tried: a side is mated when every
    /// palace square orthogonally next to its General is attacked.
    /// Capturing the attacker or blocking the line is not considered.
    #[default]
    #[display("general-escape")]
    GeneralEscape,
    /// A side is mated when none of its pieces has a move that leaves its
    /// General safe.
    #[display("complete")]
    Complete,
}

/// Settings that change how a game is adjudicated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_setters::Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Checkmate rule applied after every committed move.
    pub checkmate_rule: CheckmateRule,
}
