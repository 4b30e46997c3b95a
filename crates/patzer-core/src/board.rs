//! The chess board: piece placement, side to move, and the en passant marker.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank piece order from rank a to rank h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete game state.
///
/// The grid is indexed `[rank][file]` where the rank is the letter axis and
/// the file is the number axis, so b7 sits at `squares[1][6]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// The pieces on the board; `None` is an empty square.
    squares: [[Option<Piece>; 8]; 8],
    /// Square of a pawn that just advanced two squares.
    ///
    /// Set by [`Board::move_piece`](crate::Board::move_piece) after a double
    /// advance and cleared by the next move. Nothing reads it yet; capture
    /// logic does not implement en passant.
    en_passant: Option<Square>,
    /// Which side moves next.
    side_to_move: Color,
}

impl Board {
    /// Return a board with the standard 32-piece starting setup, White to move.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for rank in 0..8 {
            board.put(Square::new(rank, 0), Piece::new(BACK_RANK[rank as usize], Color::White));
            board.put(Square::new(rank, 1), Piece::new(PieceKind::Pawn, Color::White));
            board.put(Square::new(rank, 6), Piece::new(PieceKind::Pawn, Color::Black));
            board.put(Square::new(rank, 7), Piece::new(BACK_RANK[rank as usize], Color::Black));
        }
        board
    }

    /// Return a board with no pieces, White to move.
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
            en_passant: None,
            side_to_move: Color::White,
        }
    }

    /// Place a piece on a square, replacing whatever was there.
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.rank() as usize][sq.file() as usize] = Some(piece);
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank() as usize][sq.file() as usize]
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the en passant marker, if set.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        Square::all().filter(|&sq| self.piece_at(sq).is_some()).count()
    }

    /// Remove and return the piece on the given square.
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank() as usize][sq.file() as usize].take()
    }

    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    pub(crate) fn flip_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.flip();
    }

    /// Return a wrapper that pretty-prints the board as an 8x8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
///
/// Files a–h label the columns, rows run from 8 down to 1, White pieces are
/// uppercase, Black lowercase, and empty squares are `*`.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for file in (0u8..8).rev() {
            write!(f, "{}", file + 1)?;
            for rank in 0u8..8 {
                match self.0.piece_at(Square::new(rank, file)) {
                    Some(piece) => write!(f, " {}", piece.glyph())?,
                    None => write!(f, " *")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
