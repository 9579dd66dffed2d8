//! Turn parity invariant: the turn counter tracks the move history.

use super::super::{Game, Side};
use super::Invariant;

/// Invariant: turn counter = starting turn + number of committed moves.
///
/// Together with odd = Red / even = Black this means sides alternate and
/// the counter only ever grows by one per move.
pub struct TurnParityInvariant;

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        game.turn_counter() == game.first_turn() + game.history().len() as u32
            && game
                .history()
                .iter()
                .enumerate()
                .all(|(i, record)| {
                    record.piece.side == Side::for_turn(game.first_turn() + i as u32)
                })
    }

    fn description() -> &'static str {
        "Turn counter advances once per move and sides alternate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameConfig};

    #[test]
    fn test_new_game_holds() {
        assert!(TurnParityInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = Game::new();
        game.make_move_notation("h1", "g3").unwrap();
        game.make_move_notation("h10", "g8").unwrap();
        game.make_move_notation("g4", "g5").unwrap();
        assert_eq!(game.turn_counter(), 4);
        assert_eq!(game.turn(), Side::Black);
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_black_to_move_position_holds() {
        let mut game = Game::from_board(Board::standard(), Side::Black, GameConfig::default()).unwrap();
        assert_eq!(game.turn_counter(), 2);
        game.make_move_notation("e7", "e6").unwrap();
        assert!(TurnParityInvariant::holds(&game));
    }
}
