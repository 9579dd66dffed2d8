//! Parsing of interactive input lines.

use strictly_xiangqi::{CoordinateError, Move};

/// One line typed at the `play` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptCommand {
    /// Make a move.
    Move(Move),
    /// Print the board again.
    Board,
    /// Print the command summary.
    Help,
    /// Leave the game.
    Quit,
}

impl std::str::FromStr for PromptCommand {
    type Err = CoordinateError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.trim().to_ascii_lowercase().as_str() {
            "board" | "b" => Ok(Self::Board),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => other.parse().map(Self::Move),
        }
    }
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Enter a move as origin and destination, e.g. `b3 e3` or `h1g3`.
Files run a-i from Red's left, ranks 1-10 from Red's side.
  board  print the board
  help   show this message
  quit   leave the game";
