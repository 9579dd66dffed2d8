//! Zone confinement invariant: palace and river-bound pieces stay in their zones.

use super::super::{Game, PieceKind};
use super::Invariant;

/// Invariant: Generals are inside their own palace, Advisors on its five
/// diagonal points, Elephants on their own side of the river.
pub struct ZoneConfinementInvariant;

impl Invariant<Game> for ZoneConfinementInvariant {
    fn holds(game: &Game) -> bool {
        game.board().pieces().all(|(square, piece)| match piece.kind {
            PieceKind::General => piece.side.palace_contains(square),
            PieceKind::Advisor => piece.side.palace_diagonal_contains(square),
            PieceKind::Elephant => piece.side.owns_rank(square.rank()),
            _ => true,
        })
    }

    fn description() -> &'static str {
        "Generals stay in the palace, Advisors on its diagonals, Elephants stay home"
    }
}
