//! First-class action types for xiangqi.
//!
//! A [`Move`] is the player's intent (origin and destination). Once the
//! engine accepts it, the committed effect is a [`MoveRecord`], and the
//! caller gets a [`MoveReport`] that narrates what happened.

use super::rules::check::Threat;
use super::square::{Coordinate, CoordinateError};
use super::types::{GameState, Piece, PieceKind, Side};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A requested move from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Square the piece starts on.
    pub from: Coordinate,
    /// Square the piece ends on.
    pub to: Coordinate,
}

impl FromStr for Move {
    type Err = CoordinateError;

    /// Parses `"b3 e3"`, `"b3-e3"` or `"b3e3"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        let split = text
            .char_indices()
            .skip(1)
            .find(|(_, c)| c.is_ascii_alphabetic())
            .map(|(i, _)| i)
            .ok_or_else(|| CoordinateError::Malformed(s.trim().to_string()))?;
        let (from, to) = text.split_at(split);
        Ok(Self::new(from.parse()?, to.parse()?))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Reason a move was rejected. Every variant is recoverable; a rejected
/// move leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has a winner.
    #[display("Game has already finished ({})", _0)]
    GameAlreadyConcluded(GameState),

    /// There is no piece on the origin square.
    #[display("There is no piece at {}", _0)]
    NoPieceAtOrigin(Coordinate),

    /// The piece on the origin belongs to the side not on move.
    #[display("It is not {}'s turn", _0)]
    WrongSideToMove(Side),

    /// The piece cannot make this move (shape or palace/river zone).
    #[display("{} at {} cannot move to {}", piece, from, to)]
    IllegalShapeOrZone {
        /// The piece asked to move.
        piece: Piece,
        /// Origin.
        from: Coordinate,
        /// Requested destination.
        to: Coordinate,
    },

    /// A piece stands in the way (Chariot line, Horse leg, Elephant eye,
    /// or a Cannon without a clean path).
    #[display("The path from {} to {} is blocked", from, to)]
    PathObstructed {
        /// Origin.
        from: Coordinate,
        /// Requested destination.
        to: Coordinate,
    },

    /// A Cannon capture would jump more than one piece.
    #[display("Cannon must jump exactly one piece to capture, found {}", screens)]
    CannonCaptureArityViolation {
        /// Pieces between the Cannon and its target.
        screens: usize,
    },

    /// The destination holds a piece of the mover's own side.
    #[display("Cannot capture own piece at {}", _0)]
    SelfCapture(Coordinate),

    /// The move would leave the mover's General attacked.
    #[display("Move leaves {} in check", _0)]
    MoverLeftInCheck(Side),

    /// A coordinate supplied as text does not name a square.
    #[display("Invalid coordinate: {}", _0)]
    InvalidCoordinate(CoordinateError),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<CoordinateError> for MoveError {
    fn from(err: CoordinateError) -> Self {
        MoveError::InvalidCoordinate(err)
    }
}

/// A committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveRecord {
    /// The piece that moved.
    pub piece: Piece,
    /// Origin.
    pub from: Coordinate,
    /// Destination.
    pub to: Coordinate,
    /// Enemy piece removed from the destination, if any.
    pub captured: Option<Piece>,
}

impl MoveRecord {
    /// The move as an origin/destination pair.
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.captured {
            Some(captured) => write!(
                f,
                "{} at {} captures {} at {}",
                self.piece, self.from, captured, self.to
            ),
            None => write!(f, "{} at {} moves to {}", self.piece, self.from, self.to),
        }
    }
}

/// What an accepted move did, for presenters and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The committed move.
    pub record: MoveRecord,
    /// Threat against the opponent's General after the move, if any.
    pub check: Option<Threat>,
    /// Game state after the move.
    pub state: GameState,
}

impl MoveReport {
    /// Side that made the move.
    pub fn mover(&self) -> Side {
        self.record.piece.side
    }

    /// True if this move ended the game.
    pub fn is_checkmate(&self) -> bool {
        self.state.is_concluded()
    }
}

impl std::fmt::Display for MoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.record)?;
        match self.check {
            Some(_) => write!(
                f,
                " and puts the {} {} in check!",
                self.mover().opponent(),
                PieceKind::General
            )?,
            None => write!(f, ".")?,
        }
        if let Some(winner) = self.state.winner() {
            write!(
                f,
                " {} has no more legal moves; CHECKMATE - {} WINS!",
                winner.opponent(),
                winner.to_string().to_uppercase()
            )?;
        }
        Ok(())
    }
}
