//! The 10×9 board and reversible trial moves.
//!
//! [`Board`] is the only place pieces are mutated. Everything that needs to
//! look ahead (self-check rejection, checkmate probing) goes through a
//! [`TrialMove`], which remembers just the two squares it touched so it can
//! put them back.

use super::square::Coordinate;
use super::types::{Piece, PieceKind, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Back-rank order from file a to file i.
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

/// Mapping from every square to its optional occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order, rank 1 first.
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Self {
            squares: vec![None; Coordinate::COUNT],
        }
    }

    /// Creates the standard opening position.
    #[instrument]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for side in [Side::Red, Side::Black] {
            let (back, cannons, soldiers) = match side {
                Side::Red => (1, 3, 4),
                Side::Black => (10, 8, 7),
            };
            for (file, kind) in BACK_RANK.iter().enumerate() {
                board.put(file as i16, back, Piece::new(*kind, side));
            }
            for file in [1, 7] {
                board.put(file, cannons, Piece::new(PieceKind::Cannon, side));
            }
            for file in [0, 2, 4, 6, 8] {
                board.put(file, soldiers, Piece::new(PieceKind::Soldier, side));
            }
        }
        board
    }

    fn put(&mut self, file: i16, rank: i16, piece: Piece) {
        if let Ok(square) = Coordinate::new(file, rank) {
            self.place(square, piece);
        }
    }

    /// Occupant of `square`, if any.
    pub fn get(&self, square: Coordinate) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// True if `square` holds a piece.
    pub fn is_occupied(&self, square: Coordinate) -> bool {
        self.get(square).is_some()
    }

    /// Puts `piece` on `square`, returning whatever was there.
    pub fn place(&mut self, square: Coordinate, piece: Piece) -> Option<Piece> {
        self.squares[square.index()].replace(piece)
    }

    /// Clears `square`, returning its occupant.
    pub fn remove(&mut self, square: Coordinate) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// The nine squares of `rank`, file a first, or `None` unless `rank`
    /// is in 1..=10.
    pub fn rank_slice(&self, rank: u8) -> Option<&[Option<Piece>]> {
        if !(1..=Coordinate::RANKS).contains(&rank) {
            return None;
        }
        let width = Coordinate::FILES as usize;
        let start = (rank as usize - 1) * width;
        self.squares.get(start..start + width)
    }

    /// The ten squares of `file`, rank 1 first, or `None` unless `file`
    /// is in 0..=8.
    pub fn file_slice(&self, file: u8) -> Option<Vec<Option<Piece>>> {
        if file >= Coordinate::FILES {
            return None;
        }
        let column = self
            .squares
            .iter()
            .skip(file as usize)
            .step_by(Coordinate::FILES as usize)
            .copied()
            .collect();
        Some(column)
    }

    /// Every occupied square with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, sq)| Some((Coordinate::from_index(i)?, (*sq)?)))
    }

    /// Occupied squares belonging to `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side == side)
    }

    /// Square of `side`'s General, if it is on the board.
    pub fn find_general(&self, side: Side) -> Option<Coordinate> {
        self.pieces_of(side)
            .find(|(_, piece)| piece.kind == PieceKind::General)
            .map(|(square, _)| square)
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// A move applied to a board that can be taken back exactly.
///
/// Holds the minimal diff: origin, destination, the piece that moved and
/// whatever it displaced. [`TrialMove::undo`] consumes the value, so a
/// trial is undone at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[must_use = "a trial move must be undone or committed"]
pub struct TrialMove {
    from: Coordinate,
    to: Coordinate,
    piece: Piece,
    displaced: Option<Piece>,
}

impl TrialMove {
    /// Moves the piece on `from` to `to`, displacing any occupant of `to`.
    ///
    /// Returns `None` and leaves the board untouched if `from` is empty or
    /// `from == to`.
    pub fn apply(board: &mut Board, from: Coordinate, to: Coordinate) -> Option<Self> {
        if from == to {
            return None;
        }
        let piece = board.remove(from)?;
        let displaced = board.place(to, piece);
        Some(Self {
            from,
            to,
            piece,
            displaced,
        })
    }

    /// Restores both touched squares to their state before [`TrialMove::apply`].
    pub fn undo(self, board: &mut Board) {
        board.squares[self.to.index()] = self.displaced;
        board.squares[self.from.index()] = Some(self.piece);
    }

    /// Keeps the move on the board and returns what it displaced.
    pub fn commit(self) -> Option<Piece> {
        self.displaced
    }

    /// Origin square.
    pub fn from(&self) -> Coordinate {
        self.from
    }

    /// Destination square.
    pub fn to(&self) -> Coordinate {
        self.to
    }

    /// The piece that moved.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The piece that was on the destination, if any.
    pub fn displaced(&self) -> Option<Piece> {
        self.displaced
    }
}

impl Board {
    /// Applies `from -> to`, runs `inspect` against the resulting position and
    /// restores the board before returning its answer.
    ///
    /// Returns `None` if the trial could not be applied (empty origin).
    pub fn with_trial<R>(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        inspect: impl FnOnce(&Board) -> R,
    ) -> Option<R> {
        let trial = TrialMove::apply(self, from, to)?;
        let answer = inspect(self);
        trial.undo(self);
        Some(answer)
    }
}
