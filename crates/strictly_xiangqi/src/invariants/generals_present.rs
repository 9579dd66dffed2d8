//! Generals-present invariant: each side has exactly one General on the board.

use super::super::{Game, PieceKind, Side};
use super::Invariant;

/// Invariant: both Generals are on the board, one each.
///
/// Check rules make a General uncapturable, so losing one means the
/// engine let an illegal move through.
pub struct GeneralsPresentInvariant;

impl Invariant<Game> for GeneralsPresentInvariant {
    fn holds(game: &Game) -> bool {
        [Side::Red, Side::Black].into_iter().all(|side| {
            game.board()
                .pieces_of(side)
                .filter(|(_, piece)| piece.kind == PieceKind::General)
                .count()
                == 1
        })
    }

    fn description() -> &'static str {
        "Each side has exactly one General on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameConfig, Piece};

    #[test]
    fn test_new_game_holds() {
        assert!(GeneralsPresentInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_second_general_violates() {
        let mut board = Board::standard();
        board.place("d2".parse().unwrap(), Piece::new(PieceKind::General, Side::Red));
        let err = Game::from_board(board, Side::Red, GameConfig::default()).unwrap_err();
        assert!(err.violations.iter().any(|v| v.contains("General")));
    }
}
