//! Movement shapes for each piece kind.
//!
//! Shape legality is pure geometry plus zone confinement: it never looks
//! at the board. Obstruction and self-check are checked elsewhere.

use super::super::{Coordinate, PieceKind, Side};
use tracing::instrument;

/// True if a `kind` piece of `side` may move from `from` to `to` by shape and zone alone.
///
/// A move to the origin square is never legal.
#[instrument(level = "trace")]
pub fn shape_legal(kind: PieceKind, side: Side, from: Coordinate, to: Coordinate) -> bool {
    if from == to {
        return false;
    }
    let (df, dr) = from.delta(to);
    let (adf, adr) = (df.abs(), dr.abs());

    match kind {
        PieceKind::General => adf + adr == 1 && side.palace_contains(to),
        PieceKind::Advisor => adf == 1 && adr == 1 && side.palace_diagonal_contains(to),
        PieceKind::Elephant => adf == 2 && adr == 2 && side.owns_rank(to.rank()),
        PieceKind::Horse => (adf == 1 && adr == 2) || (adf == 2 && adr == 1),
        PieceKind::Chariot | PieceKind::Cannon => df == 0 || dr == 0,
        PieceKind::Soldier => soldier_shape(side, from, df, dr),
    }
}

fn soldier_shape(side: Side, from: Coordinate, df: i8, dr: i8) -> bool {
    let forward = df == 0 && dr == side.forward();
    let crossed = !side.owns_rank(from.rank());
    let sideways = crossed && dr == 0 && df.abs() == 1;
    forward || sideways
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn legal(kind: PieceKind, side: Side, from: &str, to: &str) -> bool {
        shape_legal(kind, side, sq(from), sq(to))
    }

    #[test]
    fn test_general_confined_to_palace() {
        assert!(legal(PieceKind::General, Side::Red, "e1", "e2"));
        assert!(legal(PieceKind::General, Side::Red, "e1", "d1"));
        assert!(!legal(PieceKind::General, Side::Red, "e1", "e4"));
        assert!(!legal(PieceKind::General, Side::Red, "e1", "d2"));
        assert!(!legal(PieceKind::General, Side::Red, "d2", "c2"));
        assert!(!legal(PieceKind::General, Side::Red, "e3", "e4"));
        assert!(legal(PieceKind::General, Side::Black, "e10", "e9"));
        assert!(!legal(PieceKind::General, Side::Black, "e8", "e7"));
    }

    #[test]
    fn test_advisor_diagonal_in_palace() {
        assert!(legal(PieceKind::Advisor, Side::Red, "d1", "e2"));
        assert!(legal(PieceKind::Advisor, Side::Red, "e2", "f3"));
        assert!(!legal(PieceKind::Advisor, Side::Red, "d1", "d2"));
        assert!(!legal(PieceKind::Advisor, Side::Red, "d3", "c4"));
        assert!(legal(PieceKind::Advisor, Side::Black, "f10", "e9"));
        assert!(!legal(PieceKind::Advisor, Side::Black, "d8", "c7"));
    }

    #[test]
    fn test_advisor_limited_to_palace_points() {
        assert!(!legal(PieceKind::Advisor, Side::Red, "e1", "d2"));
        assert!(!legal(PieceKind::Advisor, Side::Red, "d2", "e3"));
        assert!(!legal(PieceKind::Advisor, Side::Black, "e10", "f9"));
        for to in ["d1", "f1", "d3", "f3"] {
            assert!(legal(PieceKind::Advisor, Side::Red, "e2", to), "e2 -> {to}");
        }
    }

    #[test]
    fn test_elephant_stays_home() {
        assert!(legal(PieceKind::Elephant, Side::Red, "c1", "e3"));
        assert!(legal(PieceKind::Elephant, Side::Red, "e3", "c5"));
        assert!(!legal(PieceKind::Elephant, Side::Red, "c5", "e7"));
        assert!(!legal(PieceKind::Elephant, Side::Red, "c1", "d3"));
        assert!(!legal(PieceKind::Elephant, Side::Red, "c1", "c3"));
        assert!(legal(PieceKind::Elephant, Side::Black, "c10", "e8"));
        assert!(!legal(PieceKind::Elephant, Side::Black, "c6", "e4"));
    }

    #[test]
    fn test_horse_leaps() {
        for to in ["a3", "c3", "d2"] {
            assert!(legal(PieceKind::Horse, Side::Red, "b1", to), "b1 -> {to}");
        }
        assert!(!legal(PieceKind::Horse, Side::Red, "b1", "b3"));
        assert!(!legal(PieceKind::Horse, Side::Red, "b1", "d3"));
    }

    #[test]
    fn test_chariot_and_cannon_lines() {
        for kind in [PieceKind::Chariot, PieceKind::Cannon] {
            assert!(legal(kind, Side::Red, "a1", "a9"));
            assert!(legal(kind, Side::Red, "a1", "i1"));
            assert!(!legal(kind, Side::Red, "a1", "b2"));
            assert!(!legal(kind, Side::Red, "a1", "a1"));
        }
    }

    #[test]
    fn test_soldier_forward_then_sideways() {
        assert!(legal(PieceKind::Soldier, Side::Red, "e4", "e5"));
        assert!(!legal(PieceKind::Soldier, Side::Red, "e4", "d4"));
        assert!(!legal(PieceKind::Soldier, Side::Red, "e5", "d5"));
        assert!(legal(PieceKind::Soldier, Side::Red, "e6", "d6"));
        assert!(!legal(PieceKind::Soldier, Side::Red, "e6", "e5"));
        assert!(!legal(PieceKind::Soldier, Side::Red, "e4", "e6"));

        assert!(legal(PieceKind::Soldier, Side::Black, "e7", "e6"));
        assert!(!legal(PieceKind::Soldier, Side::Black, "e6", "d6"));
        assert!(legal(PieceKind::Soldier, Side::Black, "e5", "f5"));
        assert!(!legal(PieceKind::Soldier, Side::Black, "e5", "e6"));
    }

    #[test]
    fn test_symmetric_under_file_mirroring() {
        for kind in PieceKind::iter() {
            for side in Side::iter() {
                for from in Coordinate::all() {
                    for to in Coordinate::all() {
                        assert_eq!(
                            shape_legal(kind, side, from, to),
                            shape_legal(kind, side, from.mirrored(), to.mirrored()),
                            "{kind} {side} {from} -> {to}"
                        );
                    }
                }
            }
        }
    }
}
