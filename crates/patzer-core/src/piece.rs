//! Colored chess pieces.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece, together with whether it has moved this game.
///
/// Pieces are plain owned values; a piece lives in the board cell it
/// occupies and is dropped when captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    has_moved: bool,
}

impl Piece {
    /// Create a piece that has not yet moved.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return whether the piece has moved in the current game.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Record that this piece has moved.
    #[inline]
    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    /// Return the board glyph: uppercase letter for White, lowercase for Black.
    #[inline]
    pub fn glyph(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn new_starts_unmoved() {
        let piece = Piece::new(PieceKind::Knight, Color::White);
        assert_eq!(piece.kind(), PieceKind::Knight);
        assert_eq!(piece.color(), Color::White);
        assert!(!piece.has_moved());
    }

    #[test]
    fn mark_moved_sticks() {
        let mut piece = Piece::new(PieceKind::Pawn, Color::Black);
        piece.mark_moved();
        assert!(piece.has_moved());
    }

    #[test]
    fn glyph_case_follows_color() {
        assert_eq!(Piece::new(PieceKind::Queen, Color::White).glyph(), 'Q');
        assert_eq!(Piece::new(PieceKind::Queen, Color::Black).glyph(), 'q');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::White).glyph(), 'P');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).glyph(), 'p');
    }

    #[test]
    fn display_matches_glyph() {
        let piece = Piece::new(PieceKind::Rook, Color::Black);
        assert_eq!(format!("{piece}"), "r");
    }
}
