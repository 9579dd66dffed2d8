//! Piece allotment invariant: no side has more of a kind than it starts with.

use super::super::{Game, PieceKind, Side};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: for every side and kind, pieces on the board ≤ the starting count.
pub struct PieceAllotmentInvariant;

impl Invariant<Game> for PieceAllotmentInvariant {
    fn holds(game: &Game) -> bool {
        Side::iter().all(|side| {
            PieceKind::iter().all(|kind| {
                game.board()
                    .pieces_of(side)
                    .filter(|(_, piece)| piece.kind == kind)
                    .count()
                    <= kind.allotment()
            })
        })
    }

    fn description() -> &'static str {
        "No side has more pieces of a kind than it starts with"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameConfig, Piece};

    #[test]
    fn test_captures_keep_allotment() {
        let mut game = Game::new();
        game.make_move_notation("b3", "b10").unwrap();
        assert!(PieceAllotmentInvariant::holds(&game));
    }

    #[test]
    fn test_sixth_soldier_violates() {
        let mut board = Board::standard();
        board.place("e5".parse().unwrap(), Piece::new(PieceKind::Soldier, Side::Red));
        let err = Game::from_board(board, Side::Red, GameConfig::default()).unwrap_err();
        assert_eq!(err.violations, vec![PieceAllotmentInvariant::description().to_string()]);
    }
}
