//! Board coordinates for xiangqi.
//!
//! Files are lettered `a`..`i` (0-8) from Red's left, ranks are numbered
//! 1-10 from Red's back rank. A [`Coordinate`] can only be built through
//! a validating constructor, so every value names a real square.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A square on the 10×9 board.
///
/// Serializes as its text form (`"e3"`), and deserializing validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

/// Error produced when a file/rank pair or its text form does not name a square.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CoordinateError {
    /// File or rank lies outside the board.
    #[display("({}, {}) is off the board", file, rank)]
    OutOfBounds {
        /// Offending file (0-based).
        file: i16,
        /// Offending rank (1-based).
        rank: i16,
    },

    /// Text is not a file letter followed by a rank number.
    #[display("'{}' is not a coordinate (expected a1..i10)", _0)]
    Malformed(String),
}

impl std::error::Error for CoordinateError {}

impl Coordinate {
    /// Number of files (columns).
    pub const FILES: u8 = 9;
    /// Number of ranks (rows).
    pub const RANKS: u8 = 10;
    /// Number of squares on the board.
    pub const COUNT: usize = (Self::FILES as usize) * (Self::RANKS as usize);

    /// Builds a coordinate from a 0-based file and a 1-based rank.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::OutOfBounds`] unless `file` is in 0..=8
    /// and `rank` in 1..=10.
    pub fn new(file: i16, rank: i16) -> Result<Self, CoordinateError> {
        if (0..Self::FILES as i16).contains(&file) && (1..=Self::RANKS as i16).contains(&rank) {
            Ok(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(CoordinateError::OutOfBounds { file, rank })
        }
    }

    /// Builds a coordinate from a row-major square index (0-89), rank 1 first.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }
        Some(Self {
            file: (index % Self::FILES as usize) as u8,
            rank: (index / Self::FILES as usize) as u8 + 1,
        })
    }

    /// Row-major square index (0-89).
    pub fn index(self) -> usize {
        (self.rank as usize - 1) * Self::FILES as usize + self.file as usize
    }

    /// 0-based file.
    pub fn file(self) -> u8 {
        self.file
    }

    /// 1-based rank.
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// File letter, `a`..`i`.
    pub fn file_letter(self) -> char {
        (b'a' + self.file) as char
    }

    /// Returns the square `d_file` files and `d_rank` ranks away, if it is on the board.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Self::new(
            self.file as i16 + d_file as i16,
            self.rank as i16 + d_rank as i16,
        )
        .ok()
    }

    /// Mirror image across the central file (a ↔ i, b ↔ h, ...).
    pub fn mirrored(self) -> Self {
        Self {
            file: Self::FILES - 1 - self.file,
            rank: self.rank,
        }
    }

    /// Signed (file, rank) displacement from `self` to `to`.
    pub fn delta(self, to: Self) -> (i8, i8) {
        (
            to.file as i8 - self.file as i8,
            to.rank as i8 - self.rank as i8,
        )
    }

    /// All 90 squares in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        let letter = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(|| CoordinateError::Malformed(text.to_string()))?;
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoordinateError::Malformed(text.to_string()));
        }
        let rank: i16 = digits
            .parse()
            .map_err(|_| CoordinateError::Malformed(text.to_string()))?;
        let file = letter.to_ascii_lowercase() as i16 - 'a' as i16;
        Self::new(file, rank)
    }
}

impl TryFrom<String> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Coordinate> for String {
    fn from(value: Coordinate) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank)
    }
}
