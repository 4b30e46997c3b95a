//! Transient move records passed between the parser, resolver, and executor.

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A partially known square: each coordinate is either fixed or left for the
/// resolver to deduce.
///
/// This replaces the classic "-1 means unknown" sentinel with per-coordinate
/// options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialSquare {
    /// The rank (letter axis), if the notation pinned it down.
    pub rank: Option<u8>,
    /// The file (number axis), if the notation pinned it down.
    pub file: Option<u8>,
}

impl PartialSquare {
    /// A partial square with both coordinates unknown.
    pub const UNKNOWN: PartialSquare = PartialSquare {
        rank: None,
        file: None,
    };

    /// A partial square with only the rank fixed.
    #[inline]
    pub const fn with_rank(rank: u8) -> PartialSquare {
        PartialSquare {
            rank: Some(rank),
            file: None,
        }
    }

    /// A partial square with only the file fixed.
    #[inline]
    pub const fn with_file(file: u8) -> PartialSquare {
        PartialSquare {
            rank: None,
            file: Some(file),
        }
    }
}

impl From<Square> for PartialSquare {
    fn from(sq: Square) -> PartialSquare {
        PartialSquare {
            rank: Some(sq.rank()),
            file: Some(sq.file()),
        }
    }
}

/// A move as described by the notation, before the starting square has been
/// deduced. Produced by the parser, consumed by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// The kind of piece to move.
    pub kind: PieceKind,
    /// Whatever the notation revealed about the starting square.
    pub start: PartialSquare,
    /// The destination square.
    pub end: Square,
    /// The promotion kind, if the notation specified one.
    pub promotion: Option<PieceKind>,
}

/// A fully resolved move, ready to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMove {
    /// The starting square.
    pub start: Square,
    /// The destination square.
    pub end: Square,
}

#[cfg(test)]
mod tests {
    use super::PartialSquare;
    use crate::square::Square;

    #[test]
    fn unknown_has_no_coordinates() {
        assert_eq!(PartialSquare::UNKNOWN.rank, None);
        assert_eq!(PartialSquare::UNKNOWN.file, None);
        assert_eq!(PartialSquare::default(), PartialSquare::UNKNOWN);
    }

    #[test]
    fn single_coordinate_constructors() {
        let by_rank = PartialSquare::with_rank(4);
        assert_eq!(by_rank.rank, Some(4));
        assert_eq!(by_rank.file, None);

        let by_file = PartialSquare::with_file(2);
        assert_eq!(by_file.rank, None);
        assert_eq!(by_file.file, Some(2));
    }

    #[test]
    fn from_square_fixes_both() {
        let partial = PartialSquare::from(Square::new(3, 5));
        assert_eq!(partial.rank, Some(3));
        assert_eq!(partial.file, Some(5));
    }
}
