//! Contract-based validation for xiangqi moves.
//!
//! Each precondition is a small struct with a `check` function, and
//! [`LegalMove`] composes them in the order a move is judged: piece on the
//! origin, side to move, shape and zone, path, self-capture. Whether the
//! move leaves the mover in check needs a trial position and is decided by
//! [`Game::make_move`](super::Game::make_move).

use super::action::{Move, MoveError};
use super::game::Game;
use super::invariants::{InvariantSet, XiangqiInvariants};
use super::rules::obstruction::check_path;
use super::rules::shape::shape_legal;
use super::{Board, GameState, Piece, Side};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} must hold before applying the action.
/// - Postcondition: {Q(before, after)} must hold after applying it.
///
/// `before` is a [`Contract::Snapshot`] of the prior state rather than the
/// whole state, so checking a transition never copies the history.
pub trait Contract<S, A> {
    /// What the postcondition remembers about the state before the action.
    type Snapshot;

    /// Records the parts of `state` the postcondition compares against.
    fn snapshot(state: &S) -> Self::Snapshot;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &Self::Snapshot, after: &S) -> Result<(), MoveError>;
}

/// Counters of a [`Game`] taken before a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSnapshot {
    /// Turn counter before the move.
    pub turn_counter: u32,
    /// Number of recorded moves before the move.
    pub history_len: usize,
    /// Pieces on the board before the move.
    pub piece_count: usize,
}

impl MoveSnapshot {
    /// Reads the counters of `game`.
    pub fn of(game: &Game) -> Self {
        Self {
            turn_counter: game.turn_counter(),
            history_len: game.history().len(),
            piece_count: game.board().count(),
        }
    }
}

/// Precondition: the game has not concluded.
pub struct GameNotConcluded;

impl GameNotConcluded {
    /// Rejects with [`MoveError::GameAlreadyConcluded`] unless in progress.
    pub fn check(state: GameState) -> Result<(), MoveError> {
        if state.is_concluded() {
            Err(MoveError::GameAlreadyConcluded(state))
        } else {
            Ok(())
        }
    }
}

/// Precondition: a piece stands on the origin square.
pub struct PieceAtOrigin;

impl PieceAtOrigin {
    /// Returns the piece on the origin.
    pub fn check(mov: &Move, board: &Board) -> Result<Piece, MoveError> {
        board.get(mov.from).ok_or(MoveError::NoPieceAtOrigin(mov.from))
    }
}

/// Precondition: the piece belongs to the side on move.
pub struct SidesTurn;

impl SidesTurn {
    /// Rejects with [`MoveError::WrongSideToMove`] carrying the piece's side.
    pub fn check(piece: &Piece, to_move: Side) -> Result<(), MoveError> {
        if piece.side != to_move {
            Err(MoveError::WrongSideToMove(piece.side))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move has the piece's shape and respects its zone.
pub struct ShapeAndZone;

impl ShapeAndZone {
    /// Rejects with [`MoveError::IllegalShapeOrZone`].
    pub fn check(mov: &Move, piece: &Piece) -> Result<(), MoveError> {
        if shape_legal(piece.kind, piece.side, mov.from, mov.to) {
            Ok(())
        } else {
            Err(MoveError::IllegalShapeOrZone {
                piece: *piece,
                from: mov.from,
                to: mov.to,
            })
        }
    }
}

/// Precondition: nothing blocks the piece's path (Cannon screen rules included).
pub struct ClearPath;

impl ClearPath {
    /// Rejects with [`MoveError::PathObstructed`] or
    /// [`MoveError::CannonCaptureArityViolation`].
    pub fn check(mov: &Move, piece: &Piece, board: &Board) -> Result<(), MoveError> {
        check_path(board, piece.kind, mov.from, mov.to)
    }
}

/// Precondition: the destination does not hold a friendly piece.
pub struct NotSelfCapture;

impl NotSelfCapture {
    /// Rejects with [`MoveError::SelfCapture`].
    pub fn check(mov: &Move, piece: &Piece, board: &Board) -> Result<(), MoveError> {
        match board.get(mov.to) {
            Some(target) if target.side == piece.side => Err(MoveError::SelfCapture(mov.to)),
            _ => Ok(()),
        }
    }
}

/// Composite precondition over a board and the side to move.
pub struct LegalMove;

impl LegalMove {
    /// Runs every board-level precondition in order and returns the moving piece.
    #[instrument(skip(board), level = "debug")]
    pub fn check(mov: &Move, board: &Board, to_move: Side) -> Result<Piece, MoveError> {
        let piece = PieceAtOrigin::check(mov, board)?;
        SidesTurn::check(&piece, to_move)?;
        ShapeAndZone::check(mov, &piece)?;
        ClearPath::check(mov, &piece, board)?;
        NotSelfCapture::check(mov, &piece, board)?;
        Ok(piece)
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game still in progress
/// - Every [`LegalMove`] check
///
/// Postconditions:
/// - Turn counter advanced by exactly one, history grew by exactly one
/// - At most one piece left the board
/// - Every invariant in [`XiangqiInvariants`]
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    type Snapshot = MoveSnapshot;

    fn snapshot(game: &Game) -> MoveSnapshot {
        MoveSnapshot::of(game)
    }

    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        GameNotConcluded::check(game.state())?;
        LegalMove::check(action, game.board(), game.turn())?;
        Ok(())
    }

    fn post(before: &MoveSnapshot, after: &Game) -> Result<(), MoveError> {
        let advanced = after.turn_counter() == before.turn_counter + 1
            && after.history().len() == before.history_len + 1;
        let lost = before.piece_count.saturating_sub(after.board().count());
        if !advanced || lost > 1 {
            warn!(advanced, lost, "Move transition violated");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a move advances one turn and captures at most one piece"
                    .to_string(),
            ));
        }

        XiangqiInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, PieceKind};

    fn mv(from: &str, to: &str) -> Move {
        Move::new(from.parse::<Coordinate>().unwrap(), to.parse().unwrap())
    }

    #[test]
    fn test_precondition_empty_origin() {
        let game = Game::new();
        assert!(matches!(
            MoveContract::pre(&game, &mv("e5", "e6")),
            Err(MoveError::NoPieceAtOrigin(_))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = Game::new();
        assert_eq!(
            MoveContract::pre(&game, &mv("e7", "e6")),
            Err(MoveError::WrongSideToMove(Side::Black))
        );
    }

    #[test]
    fn test_precondition_self_capture() {
        let board = Board::standard();
        // Chariot a1 -> a4 lands on its own soldier.
        assert_eq!(
            LegalMove::check(&mv("a1", "a4"), &board, Side::Red),
            Err(MoveError::SelfCapture("a4".parse().unwrap()))
        );
    }

    #[test]
    fn test_precondition_order_shape_before_path() {
        let board = Board::standard();
        // Chariot diagonal: shape fails before any path check.
        assert!(matches!(
            LegalMove::check(&mv("a1", "c3"), &board, Side::Red),
            Err(MoveError::IllegalShapeOrZone { .. })
        ));
    }

    #[test]
    fn test_legal_move_returns_piece() {
        let board = Board::standard();
        let piece = LegalMove::check(&mv("h1", "g3"), &board, Side::Red).unwrap();
        assert_eq!(piece, Piece::new(PieceKind::Horse, Side::Red));
    }

    #[test]
    fn test_snapshot_of_opening() {
        assert_eq!(
            MoveContract::snapshot(&Game::new()),
            MoveSnapshot {
                turn_counter: 1,
                history_len: 0,
                piece_count: 32,
            }
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut game = Game::new();
        let before = MoveContract::snapshot(&game);
        game.make_move_notation("b3", "e3").unwrap();
        assert!(MoveContract::post(&before, &game).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_capture() {
        let mut game = Game::new();
        game.make_move_notation("b3", "b10").unwrap();
        let before = MoveContract::snapshot(&game);
        game.make_move_notation("a10", "b10").unwrap();
        assert_eq!(game.board().count(), before.piece_count - 1);
        assert!(MoveContract::post(&before, &game).is_ok());
    }

    #[test]
    fn test_postcondition_detects_stalled_turn() {
        let game = Game::new();
        let before = MoveContract::snapshot(&game);
        assert!(MoveContract::post(&before, &game).is_err());
    }

    #[test]
    fn test_postcondition_detects_two_pieces_lost() {
        let mut game = Game::new();
        let mut before = MoveContract::snapshot(&game);
        game.make_move_notation("b3", "e3").unwrap();
        before.piece_count += 2;
        assert!(matches!(
            MoveContract::post(&before, &game),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
