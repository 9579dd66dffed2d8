//! Strictly Xiangqi - a contract-checked Chinese chess rules engine
//!
//! The engine owns the board, per-piece move legality, check and checkmate
//! detection, and move application with rollback. Parsing, rendering and
//! the game loop belong to callers.
//!
//! # Architecture
//!
//! - **Coordinates**: validated squares, `a1` (Red's left corner) to `i10`
//! - **Rules**: shape predicates, obstruction scans, check and checkmate detection
//! - **Contracts**: ordered preconditions every move must satisfy
//! - **Invariants**: properties re-checked after every committed move in debug builds
//! - **Game**: the session that threads board, turn counter and state
//!
//! # Example
//!
//! ```
//! use strictly_xiangqi::{Game, GameState, MoveError, Side};
//!
//! let mut game = Game::new();
//! let report = game.make_move_notation("b3", "e3")?;
//! assert_eq!(report.to_string(), "Red Cannon at b3 moves to e3.");
//! assert_eq!(game.turn(), Side::Black);
//! assert_eq!(game.state(), GameState::InProgress);
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod contracts;
mod game;
mod invariants;
mod rules;
mod square;
mod types;

// Crate-level exports - Squares
pub use square::{Coordinate, CoordinateError};

// Crate-level exports - Pieces and sides
pub use types::{GameState, Piece, PieceKind, Side};

// Crate-level exports - Board
pub use board::{Board, TrialMove};

// Crate-level exports - Actions and outcomes
pub use action::{Move, MoveError, MoveRecord, MoveReport};

// Crate-level exports - Rules
pub use rules::{
    Threat, check_path, count_between, elephant_eye, find_threat, horse_leg, is_checkmate,
    is_in_check, shape_legal,
};

// Crate-level exports - Configuration
pub use config::{CheckmateRule, GameConfig};

// Crate-level exports - Contracts
pub use contracts::{
    ClearPath, Contract, GameNotConcluded, LegalMove, MoveContract, MoveSnapshot, NotSelfCapture,
    PieceAtOrigin, ShapeAndZone, SidesTurn,
};

// Crate-level exports - Invariants
pub use invariants::{
    GeneralsPresentInvariant, Invariant, InvariantSet, InvariantViolation,
    PieceAllotmentInvariant, TurnParityInvariant, XiangqiInvariants, ZoneConfinementInvariant,
};

// Crate-level exports - Game session
pub use game::{Game, PositionError};
