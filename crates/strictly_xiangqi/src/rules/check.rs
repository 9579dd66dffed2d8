//! Check detection.
//!
//! A General is attacked if any of five threat geometries holds. Every
//! function here takes `&Board`, so it can be asked about the live
//! position or a trial position alike without changing either.

use super::super::{Board, Coordinate, PieceKind, Side};
use super::obstruction::{count_between, horse_leg};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Knight offsets from the General at which an enemy Horse could stand.
const HORSE_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// The reason a General is in check, naming the attacker's square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Threat {
    /// The two Generals face each other on an open file.
    #[display("the generals face each other on an open file")]
    FlyingGeneral(Coordinate),
    /// An enemy Soldier is one step away.
    #[display("Soldier at {}", _0)]
    Soldier(Coordinate),
    /// An enemy Horse has an unblocked leap onto the General.
    #[display("Horse at {}", _0)]
    Horse(Coordinate),
    /// An enemy Chariot has an open line to the General.
    #[display("Chariot at {}", _0)]
    Chariot(Coordinate),
    /// An enemy Cannon has exactly one screen before the General.
    #[display("Cannon at {}", _0)]
    Cannon(Coordinate),
}

impl Threat {
    /// Square of the attacking piece.
    pub fn attacker(&self) -> Coordinate {
        match *self {
            Threat::FlyingGeneral(c)
            | Threat::Soldier(c)
            | Threat::Horse(c)
            | Threat::Chariot(c)
            | Threat::Cannon(c) => c,
        }
    }
}

/// True if `side`'s General is attacked on `board`.
///
/// A side with no General on the board is never in check.
#[instrument(skip(board), level = "debug")]
pub fn is_in_check(board: &Board, side: Side) -> bool {
    find_threat(board, side).is_some()
}

/// First threat against `side`'s General, checked in a fixed order:
/// flying general, Soldier, Horse, Chariot, Cannon.
pub fn find_threat(board: &Board, side: Side) -> Option<Threat> {
    let general = board.find_general(side)?;
    let threat = flying_general(board, side, general)
        .or_else(|| soldier_threat(board, side, general))
        .or_else(|| horse_threat(board, side, general))
        .or_else(|| line_threat(board, side, general));
    if let Some(threat) = threat {
        trace!(%side, %threat, "General attacked");
    }
    threat
}

fn flying_general(board: &Board, side: Side, general: Coordinate) -> Option<Threat> {
    let enemy = board.find_general(side.opponent())?;
    (enemy.file() == general.file() && count_between(board, general, enemy) == Some(0))
        .then_some(Threat::FlyingGeneral(enemy))
}

/// Enemy Soldiers capture forward or, once across the river, sideways.
/// Relative to the General that means its left and right neighbors and
/// the square in front of it, seen from the General's own side.
fn soldier_threat(board: &Board, side: Side, general: Coordinate) -> Option<Threat> {
    [(-1, 0), (1, 0), (0, side.forward())]
        .into_iter()
        .filter_map(|(df, dr)| general.offset(df, dr))
        .find(|square| is_enemy(board, side, *square, PieceKind::Soldier))
        .map(Threat::Soldier)
}

fn horse_threat(board: &Board, side: Side, general: Coordinate) -> Option<Threat> {
    HORSE_OFFSETS
        .iter()
        .filter_map(|&(df, dr)| general.offset(df, dr))
        .filter(|square| is_enemy(board, side, *square, PieceKind::Horse))
        .find(|horse| horse_leg(*horse, general).is_some_and(|leg| !board.is_occupied(leg)))
        .map(Threat::Horse)
}

fn line_threat(board: &Board, side: Side, general: Coordinate) -> Option<Threat> {
    let on_line = |square: &Coordinate| {
        square.file() == general.file() || square.rank() == general.rank()
    };
    let attackers = board
        .pieces_of(side.opponent())
        .filter(|(square, _)| on_line(square));

    let mut cannon = None;
    for (square, piece) in attackers {
        let between = count_between(board, square, general);
        match (piece.kind, between) {
            (PieceKind::Chariot, Some(0)) => return Some(Threat::Chariot(square)),
            (PieceKind::Cannon, Some(1)) => {
                cannon.get_or_insert(Threat::Cannon(square));
            }
            _ => {}
        }
    }
    cannon
}

fn is_enemy(board: &Board, side: Side, square: Coordinate, kind: PieceKind) -> bool {
    board
        .get(square)
        .is_some_and(|piece| piece.side != side && piece.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn generals() -> Board {
        let mut board = Board::empty();
        board.place(sq("d1"), Piece::new(PieceKind::General, Side::Red));
        board.place(sq("f10"), Piece::new(PieceKind::General, Side::Black));
        board
    }

    #[test]
    fn test_opening_is_quiet() {
        let board = Board::standard();
        assert!(!is_in_check(&board, Side::Red));
        assert!(!is_in_check(&board, Side::Black));
    }

    #[test]
    fn test_flying_general() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::new(PieceKind::General, Side::Red));
        board.place(sq("e10"), Piece::new(PieceKind::General, Side::Black));
        assert_eq!(find_threat(&board, Side::Red), Some(Threat::FlyingGeneral(sq("e10"))));
        assert_eq!(find_threat(&board, Side::Black), Some(Threat::FlyingGeneral(sq("e1"))));

        board.place(sq("e5"), Piece::new(PieceKind::Horse, Side::Red));
        assert!(!is_in_check(&board, Side::Red));
    }

    #[test]
    fn test_soldier_adjacency_is_directional() {
        let mut board = generals();
        // Black soldier in front of the red general (toward Black).
        board.place(sq("d2"), Piece::new(PieceKind::Soldier, Side::Black));
        assert_eq!(find_threat(&board, Side::Red), Some(Threat::Soldier(sq("d2"))));

        let mut board = generals();
        board.place(sq("e1"), Piece::new(PieceKind::Soldier, Side::Black));
        assert_eq!(find_threat(&board, Side::Red), Some(Threat::Soldier(sq("e1"))));

        // A red soldier beside the black general also checks; one behind it does not.
        let mut board = generals();
        board.place(sq("f9"), Piece::new(PieceKind::Soldier, Side::Red));
        assert_eq!(find_threat(&board, Side::Black), Some(Threat::Soldier(sq("f9"))));
        let mut board = generals();
        board.remove(sq("d1"));
        board.place(sq("e3"), Piece::new(PieceKind::General, Side::Red));
        board.place(sq("e2"), Piece::new(PieceKind::Soldier, Side::Black));
        assert!(!is_in_check(&board, Side::Red));
    }

    #[test]
    fn test_horse_check_respects_leg() {
        let mut board = generals();
        board.place(sq("e3"), Piece::new(PieceKind::Horse, Side::Black));
        assert_eq!(find_threat(&board, Side::Red), Some(Threat::Horse(sq("e3"))));

        // Leg for e3 -> d1 is e2.
        board.place(sq("e2"), Piece::new(PieceKind::Advisor, Side::Red));
        assert!(!is_in_check(&board, Side::Red));
    }

    #[test]
    fn test_chariot_line() {
        let mut board = generals();
        board.place(sq("d8"), Piece::new(PieceKind::Chariot, Side::Black));
        assert_eq!(find_threat(&board, Side::Red), Some(Threat::Chariot(sq("d8"))));

        board.place(sq("d5"), Piece::new(PieceKind::Soldier, Side::Red));
        assert!(!is_in_check(&board, Side::Red));

        board.place(sq("a1"), Piece::new(PieceKind::Chariot, Side::Black));
        assert_eq!(find_threat(&board, Side::Red), Some(Threat::Chariot(sq("a1"))));
    }

    #[test]
    fn test_cannon_needs_exactly_one_screen() {
        let mut board = generals();
        board.place(sq("d9"), Piece::new(PieceKind::Cannon, Side::Black));
        assert!(!is_in_check(&board, Side::Red));

        board.place(sq("d4"), Piece::new(PieceKind::Soldier, Side::Red));
        assert_eq!(find_threat(&board, Side::Red), Some(Threat::Cannon(sq("d9"))));

        board.place(sq("d6"), Piece::new(PieceKind::Soldier, Side::Black));
        assert!(!is_in_check(&board, Side::Red));
    }

    #[test]
    fn test_friendly_pieces_never_threaten() {
        let mut board = generals();
        board.place(sq("d5"), Piece::new(PieceKind::Chariot, Side::Red));
        board.place(sq("e3"), Piece::new(PieceKind::Horse, Side::Red));
        board.place(sq("d2"), Piece::new(PieceKind::Soldier, Side::Red));
        assert!(!is_in_check(&board, Side::Red));
    }

    #[test]
    fn test_missing_general_is_not_in_check() {
        let mut board = Board::empty();
        board.place(sq("e5"), Piece::new(PieceKind::Chariot, Side::Black));
        assert!(!is_in_check(&board, Side::Red));
    }

    #[test]
    fn test_query_does_not_mutate() {
        let mut board = generals();
        board.place(sq("d8"), Piece::new(PieceKind::Chariot, Side::Black));
        let before = board.clone();
        for _ in 0..3 {
            assert!(is_in_check(&board, Side::Red));
        }
        assert_eq!(board, before);
    }
}
