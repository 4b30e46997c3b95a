//! Chess board squares as bounded (rank, file) pairs.
//!
//! The coordinate order follows algebraic notation the way the board is
//! indexed here: the rank is the letter axis (a–h) and the file is the
//! number axis (1–8), so b7 is rank 1, file 6. A pawn moving forward
//! changes its file, not its rank.

use std::fmt;

/// A square on the chess board.
///
/// Both coordinates are zero-based and always in `0..=7`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Number of ranks (and files) on the board.
    pub const SIDE: u8 = 8;

    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both coordinates are in range. Use [`Square::try_new`]
    /// for unvalidated input.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Square {
        debug_assert!(rank < Square::SIDE && file < Square::SIDE);
        Square { rank, file }
    }

    /// Create a square from a rank and file, returning `None` if either is
    /// out of range.
    #[inline]
    pub const fn try_new(rank: u8, file: u8) -> Option<Square> {
        if rank < Square::SIDE && file < Square::SIDE {
            Some(Square { rank, file })
        } else {
            None
        }
    }

    /// Return the rank (letter axis, 0 = a, 7 = h).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Return the file (number axis, 0 = 1, 7 = 8).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Return the square shifted by the given signed rank/file deltas,
    /// or `None` if the result leaves the board.
    #[inline]
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Square> {
        let rank = self.rank as i8 + rank_delta;
        let file = self.file as i8 + file_delta;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::new(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// Return the rank as its algebraic letter (a–h).
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'a' + self.rank) as char
    }

    /// Return the file as its algebraic digit (1–8).
    #[inline]
    pub const fn file_char(self) -> char {
        (b'1' + self.file) as char
    }

    /// Iterate over all 64 squares in rank-major order (a1, a2, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|rank| (0u8..8).map(move |file| Square::new(rank, file)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.file_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
