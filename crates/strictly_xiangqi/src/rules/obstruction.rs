//! Obstruction and line-of-sight queries.
//!
//! Counts pieces strictly between two squares on a shared file or rank,
//! and locates the single blocking square for Horse legs and Elephant eyes.

use super::super::action::MoveError;
use super::super::{Board, Coordinate, PieceKind};
use tracing::{instrument, trace};

/// Number of occupied squares strictly between `a` and `b`.
///
/// Returns `None` if the two squares share neither a file nor a rank.
/// Adjacent squares (and `a == b`) have nothing between them.
pub fn count_between(board: &Board, a: Coordinate, b: Coordinate) -> Option<usize> {
    let (df, dr) = a.delta(b);
    if df != 0 && dr != 0 {
        return None;
    }
    let steps = df.abs().max(dr.abs());
    let (sf, sr) = (df.signum(), dr.signum());
    let count = (1..steps)
        .filter_map(|i| a.offset(sf * i, sr * i))
        .filter(|square| board.is_occupied(*square))
        .count();
    Some(count)
}

/// Square that blocks a Horse leaping from `from` to `to`.
///
/// It is the orthogonal neighbor of `from` along the long axis of the leap.
/// Returns `None` if the move is not a Horse leap.
pub fn horse_leg(from: Coordinate, to: Coordinate) -> Option<Coordinate> {
    let (df, dr) = from.delta(to);
    match (df.abs(), dr.abs()) {
        (1, 2) => from.offset(0, dr.signum()),
        (2, 1) => from.offset(df.signum(), 0),
        _ => None,
    }
}

/// Midpoint that blocks an Elephant moving from `from` to `to`.
///
/// Returns `None` if the move is not a two-by-two diagonal.
pub fn elephant_eye(from: Coordinate, to: Coordinate) -> Option<Coordinate> {
    let (df, dr) = from.delta(to);
    if df.abs() == 2 && dr.abs() == 2 {
        from.offset(df / 2, dr / 2)
    } else {
        None
    }
}

/// Checks the kind-specific path rule for a shape-legal move.
///
/// # Errors
///
/// - [`MoveError::PathObstructed`] if a Chariot line, Horse leg or
///   Elephant eye is blocked, or a Cannon has no clean path.
/// - [`MoveError::CannonCaptureArityViolation`] if a Cannon capture would
///   jump more than one piece.
#[instrument(skip(board), level = "debug")]
pub fn check_path(
    board: &Board,
    kind: PieceKind,
    from: Coordinate,
    to: Coordinate,
) -> Result<(), MoveError> {
    let obstructed = MoveError::PathObstructed { from, to };
    match kind {
        PieceKind::General | PieceKind::Advisor | PieceKind::Soldier => Ok(()),
        PieceKind::Elephant => match elephant_eye(from, to) {
            Some(eye) if !board.is_occupied(eye) => Ok(()),
            _ => Err(obstructed),
        },
        PieceKind::Horse => match horse_leg(from, to) {
            Some(leg) if !board.is_occupied(leg) => Ok(()),
            _ => Err(obstructed),
        },
        PieceKind::Chariot => match count_between(board, from, to) {
            Some(0) => Ok(()),
            _ => Err(obstructed),
        },
        PieceKind::Cannon => {
            let screens = count_between(board, from, to).ok_or(obstructed.clone())?;
            let capturing = board.is_occupied(to);
            trace!(screens, capturing, "Cannon path");
            match (capturing, screens) {
                (false, 0) | (true, 1) => Ok(()),
                (true, n) if n >= 2 => Err(MoveError::CannonCaptureArityViolation { screens: n }),
                _ => Err(obstructed),
            }
        }
    }
}
