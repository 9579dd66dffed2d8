//! Checkmate detection.
//!
//! Two rules are available, selected by [`CheckmateRule`]. Both test trial
//! positions through [`Board::with_trial`], so the board is unchanged when they
//! return.

use super::super::action::Move;
use super::super::config::CheckmateRule;
use super::super::contracts::LegalMove;
use super::super::{Board, Coordinate, PieceKind, Side};
use super::check::is_in_check;
use super::shape::shape_legal;
use tracing::{debug, instrument};

/// Orthogonal single steps a General may take.
const GENERAL_STEPS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// True if `side` has no escape under `rule`.
///
/// A side without a General on the board is considered mated.
#[instrument(skip(board), level = "debug")]
pub fn is_checkmate(board: &mut Board, side: Side, rule: CheckmateRule) -> bool {
    let Some(general) = board.find_general(side) else {
        debug!(%side, "No General on the board");
        return true;
    };
    let mated = match rule {
        CheckmateRule::GeneralEscape => !general_can_step_out(board, side, general),
        CheckmateRule::Complete => !has_safe_move(board, side),
    };
    debug!(%side, %rule, mated, "Checkmate search finished");
    mated
}

/// Tries each palace step of the General. Whatever stands on the target
/// square is displaced for the trial, friend or foe.
fn general_can_step_out(board: &mut Board, side: Side, general: Coordinate) -> bool {
    GENERAL_STEPS.iter().any(|&(df, dr)| {
        general
            .offset(df, dr)
            .filter(|&to| shape_legal(PieceKind::General, side, general, to))
            .and_then(|to| board.with_trial(general, to, |trial| !is_in_check(trial, side)))
            .unwrap_or(false)
    })
}

/// Searches every legal move of every piece of `side` for one that leaves
/// its General unattacked. A side with no legal move at all is mated.
fn has_safe_move(board: &mut Board, side: Side) -> bool {
    let origins: Vec<Coordinate> = board.pieces_of(side).map(|(square, _)| square).collect();
    origins.into_iter().any(|from| {
        Coordinate::all().any(|to| {
            LegalMove::check(&Move::new(from, to), board, side).is_ok()
                && board
                    .with_trial(from, to, |trial| !is_in_check(trial, side))
                    .unwrap_or(false)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    /// Black General on e10 under a Chariot on a10, with e9 covered from i9.
    fn boxed_black_general() -> Board {
        let mut board = Board::empty();
        board.place(sq("d1"), Piece::new(PieceKind::General, Side::Red));
        board.place(sq("e10"), Piece::new(PieceKind::General, Side::Black));
        board.place(sq("a10"), Piece::new(PieceKind::Chariot, Side::Red));
        board.place(sq("i9"), Piece::new(PieceKind::Chariot, Side::Red));
        board
    }

    #[test]
    fn test_opening_is_not_mate() {
        let mut board = Board::standard();
        for rule in [CheckmateRule::GeneralEscape, CheckmateRule::Complete] {
            assert!(!is_checkmate(&mut board, Side::Red, rule));
            assert!(!is_checkmate(&mut board, Side::Black, rule));
        }
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_boxed_general_is_mate_under_both_rules() {
        let mut board = boxed_black_general();
        assert!(is_checkmate(&mut board, Side::Black, CheckmateRule::GeneralEscape));
        assert!(is_checkmate(&mut board, Side::Black, CheckmateRule::Complete));
        assert_eq!(board, boxed_black_general());
    }

    #[test]
    fn test_capture_escape_only_seen_by_complete_rule() {
        let mut board = boxed_black_general();
        // A Black Chariot can take the checking Chariot on a10.
        board.place(sq("a5"), Piece::new(PieceKind::Chariot, Side::Black));
        assert!(is_checkmate(&mut board, Side::Black, CheckmateRule::GeneralEscape));
        assert!(!is_checkmate(&mut board, Side::Black, CheckmateRule::Complete));
    }

    #[test]
    fn test_single_free_step_escapes() {
        let mut board = boxed_black_general();
        board.remove(sq("i9"));
        assert!(!is_checkmate(&mut board, Side::Black, CheckmateRule::GeneralEscape));
        assert!(!is_checkmate(&mut board, Side::Black, CheckmateRule::Complete));
    }

    #[test]
    fn test_missing_general_is_mate() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::new(PieceKind::General, Side::Red));
        assert!(is_checkmate(&mut board, Side::Black, CheckmateRule::GeneralEscape));
        assert!(is_checkmate(&mut board, Side::Black, CheckmateRule::Complete));
    }
}
