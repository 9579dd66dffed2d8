//! Core domain types for xiangqi.

use super::square::Coordinate;
use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Side {
    /// Red (ranks 1-5, moves first).
    Red,
    /// Black (ranks 6-10).
    Black,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Rank direction of a forward step: +1 for Red, -1 for Black.
    pub fn forward(self) -> i8 {
        match self {
            Side::Red => 1,
            Side::Black => -1,
        }
    }

    /// True if `rank` is on this side's half of the river.
    pub fn owns_rank(self, rank: u8) -> bool {
        match self {
            Side::Red => rank <= 5,
            Side::Black => rank >= 6,
        }
    }

    /// True if `square` lies inside this side's palace (files d-f, three home ranks).
    pub fn palace_contains(self, square: Coordinate) -> bool {
        let in_files = (3..=5).contains(&square.file());
        let in_ranks = match self {
            Side::Red => (1..=3).contains(&square.rank()),
            Side::Black => (8..=10).contains(&square.rank()),
        };
        in_files && in_ranks
    }

    /// True if `square` is one of the five palace points on the diagonals
    /// (four corners and the centre), the only squares an Advisor may use.
    pub fn palace_diagonal_contains(self, square: Coordinate) -> bool {
        let depth = match self {
            Side::Red => square.rank() as i16 - 1,
            Side::Black => 10 - square.rank() as i16,
        };
        self.palace_contains(square) && (square.file() as i16 - 4).abs() == (depth - 1).abs()
    }

    /// Side to move on the given turn: odd turns are Red, even turns Black.
    pub fn for_turn(turn: u32) -> Self {
        if turn % 2 == 1 { Side::Red } else { Side::Black }
    }

    /// Lowercase single-letter prefix used by the letter glyphs (`r`, `b`).
    pub fn letter(self) -> char {
        match self {
            Side::Red => 'r',
            Side::Black => 'b',
        }
    }
}

/// The seven piece kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum PieceKind {
    /// Moves one step orthogonally inside the palace.
    General,
    /// Moves one step diagonally inside the palace.
    Advisor,
    /// Moves two steps diagonally, never across the river.
    Elephant,
    /// Leaps one orthogonal plus one diagonal step.
    Horse,
    /// Moves any distance along a file or rank.
    Chariot,
    /// Moves like a Chariot, captures by jumping exactly one screen.
    Cannon,
    /// Moves forward; sideways too once across the river.
    Soldier,
}

impl PieceKind {
    /// Number of pieces of this kind each side starts with.
    pub fn allotment(self) -> usize {
        match self {
            PieceKind::General => 1,
            PieceKind::Soldier => 5,
            _ => 2,
        }
    }

    /// Uppercase abbreviation (`R` is the Chariot, as in "rook").
    pub fn letter(self) -> char {
        match self {
            PieceKind::General => 'G',
            PieceKind::Advisor => 'A',
            PieceKind::Elephant => 'E',
            PieceKind::Horse => 'H',
            PieceKind::Chariot => 'R',
            PieceKind::Cannon => 'C',
            PieceKind::Soldier => 'S',
        }
    }
}

/// A piece: its kind and the side that owns it.
///
/// The square it stands on is the board index holding it, so a piece
/// relocated by a move is the same value at a new index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Piece {
    /// What kind of piece this is.
    pub kind: PieceKind,
    /// Owner.
    pub side: Side,
}

impl Piece {
    /// Two-letter glyph: side then kind, e.g. `rR` for a Red Chariot.
    pub fn glyph(&self) -> String {
        format!("{}{}", self.side.letter(), self.kind.letter())
    }

    /// Traditional Chinese character for the piece.
    pub fn chinese(&self) -> char {
        match (self.side, self.kind) {
            (Side::Red, PieceKind::General) => '帥',
            (Side::Red, PieceKind::Advisor) => '仕',
            (Side::Red, PieceKind::Elephant) => '相',
            (Side::Red, PieceKind::Horse) => '傌',
            (Side::Red, PieceKind::Chariot) => '俥',
            (Side::Red, PieceKind::Cannon) => '炮',
            (Side::Red, PieceKind::Soldier) => '兵',
            (Side::Black, PieceKind::General) => '將',
            (Side::Black, PieceKind::Advisor) => '士',
            (Side::Black, PieceKind::Elephant) => '象',
            (Side::Black, PieceKind::Horse) => '馬',
            (Side::Black, PieceKind::Chariot) => '車',
            (Side::Black, PieceKind::Cannon) => '砲',
            (Side::Black, PieceKind::Soldier) => '卒',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}

/// Overall status of a game. Once it leaves `InProgress` it never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameState {
    /// Moves are still being accepted.
    #[display("in progress")]
    InProgress,
    /// Red checkmated Black.
    #[display("Red won")]
    RedWins,
    /// Black checkmated Red.
    #[display("Black won")]
    BlackWins,
}

impl GameState {
    /// Terminal state in which `side` has won.
    pub fn won_by(side: Side) -> Self {
        match side {
            Side::Red => GameState::RedWins,
            Side::Black => GameState::BlackWins,
        }
    }

    /// The winner, if the game has concluded.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameState::InProgress => None,
            GameState::RedWins => Some(Side::Red),
            GameState::BlackWins => Some(Side::Black),
        }
    }

    /// True once the game has a winner.
    pub fn is_concluded(self) -> bool {
        self != GameState::InProgress
    }
}
