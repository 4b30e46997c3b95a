//! Deducing the starting square of a partially specified move.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::PartialSquare;
use crate::error::MoveError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Deduce the starting square for moving a piece of `kind` to `end`.
    ///
    /// The search space follows from which coordinates of `start` the
    /// notation pinned down: a single square, one rank, one file, or the
    /// whole board. A square qualifies when it holds a piece of `kind`
    /// belonging to the side to move that can reach `end`. Exactly one
    /// qualifying square must exist: zero is [`MoveError::NoPieceFound`]
    /// and two or more is [`MoveError::Ambiguous`]. Ambiguity is never
    /// broken by a heuristic.
    pub fn resolve_start(
        &self,
        kind: PieceKind,
        end: Square,
        start: PartialSquare,
    ) -> Result<Square, MoveError> {
        let mut found = 0usize;
        let mut resolved = None;

        let candidates: Vec<Square> = match (start.rank, start.file) {
            (Some(rank), Some(file)) => vec![Square::new(rank, file)],
            (Some(rank), None) => (0..8).map(|file| Square::new(rank, file)).collect(),
            (None, Some(file)) => (0..8).map(|rank| Square::new(rank, file)).collect(),
            (None, None) => Square::all().collect(),
        };

        for sq in candidates {
            let qualifies = self
                .piece_at(sq)
                .is_some_and(|piece| piece.kind() == kind && piece.color() == self.side_to_move())
                && self.is_reachable(sq, end);
            if qualifies {
                found += 1;
                resolved = Some(sq);
            }
        }

        debug!(kind = %kind, %end, found, "resolved start square candidates");
        match (found, resolved) {
            (1, Some(sq)) => Ok(sq),
            (0, _) => Err(MoveError::NoPieceFound),
            (count, _) => Err(MoveError::Ambiguous { count }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::PartialSquare;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn unique_candidate_resolves() {
        let board = Board::new();
        // From the start only the e-pawn reaches e4.
        let start = board
            .resolve_start(PieceKind::Pawn, Square::new(4, 3), PartialSquare::UNKNOWN)
            .unwrap();
        assert_eq!(start, Square::new(4, 1));
    }

    #[test]
    fn no_candidate_is_an_error() {
        let board = Board::new();
        // No queen reaches h4 from the starting position.
        let err = board
            .resolve_start(PieceKind::Queen, Square::new(7, 3), PartialSquare::UNKNOWN)
            .unwrap_err();
        assert_eq!(err, MoveError::NoPieceFound);
    }

    #[test]
    fn two_knights_are_ambiguous() {
        let mut board = Board::empty();
        // Knights on b1 and d1 both reach c3.
        board.put(Square::new(1, 0), Piece::new(PieceKind::Knight, Color::White));
        board.put(Square::new(3, 0), Piece::new(PieceKind::Knight, Color::White));
        let err = board
            .resolve_start(PieceKind::Knight, Square::new(2, 2), PartialSquare::UNKNOWN)
            .unwrap_err();
        assert_eq!(err, MoveError::Ambiguous { count: 2 });
    }

    #[test]
    fn rank_disambiguator_narrows_to_one() {
        let mut board = Board::empty();
        board.put(Square::new(1, 0), Piece::new(PieceKind::Knight, Color::White));
        board.put(Square::new(3, 0), Piece::new(PieceKind::Knight, Color::White));
        let start = board
            .resolve_start(PieceKind::Knight, Square::new(2, 2), PartialSquare::with_rank(1))
            .unwrap();
        assert_eq!(start, Square::new(1, 0));
    }

    #[test]
    fn file_disambiguator_narrows_to_one() {
        let mut board = Board::empty();
        // Rooks on a1 and a5 both reach a3.
        board.put(Square::new(0, 0), Piece::new(PieceKind::Rook, Color::White));
        board.put(Square::new(0, 4), Piece::new(PieceKind::Rook, Color::White));
        assert_eq!(
            board.resolve_start(PieceKind::Rook, Square::new(0, 2), PartialSquare::UNKNOWN),
            Err(MoveError::Ambiguous { count: 2 })
        );
        let start = board
            .resolve_start(PieceKind::Rook, Square::new(0, 2), PartialSquare::with_file(4))
            .unwrap();
        assert_eq!(start, Square::new(0, 4));
    }

    #[test]
    fn fully_specified_start_is_checked_not_trusted() {
        let mut board = Board::empty();
        board.put(Square::new(1, 0), Piece::new(PieceKind::Knight, Color::White));
        let exact = PartialSquare::from(Square::new(1, 0));
        let start = board
            .resolve_start(PieceKind::Knight, Square::new(2, 2), exact)
            .unwrap();
        assert_eq!(start, Square::new(1, 0));

        // Same square, wrong kind claimed.
        assert_eq!(
            board.resolve_start(PieceKind::Bishop, Square::new(2, 2), exact),
            Err(MoveError::NoPieceFound)
        );
    }

    #[test]
    fn opponent_pieces_never_qualify() {
        let mut board = Board::empty();
        // A black knight can reach c3, but it is White to move.
        board.put(Square::new(1, 0), Piece::new(PieceKind::Knight, Color::Black));
        assert_eq!(
            board.resolve_start(PieceKind::Knight, Square::new(2, 2), PartialSquare::UNKNOWN),
            Err(MoveError::NoPieceFound)
        );
    }

    #[test]
    fn ambiguity_counts_every_candidate() {
        let mut board = Board::empty();
        // Four knights around d4.
        for sq in [
            Square::new(1, 2),
            Square::new(1, 4),
            Square::new(5, 2),
            Square::new(5, 4),
        ] {
            board.put(sq, Piece::new(PieceKind::Knight, Color::White));
        }
        assert_eq!(
            board.resolve_start(PieceKind::Knight, Square::new(3, 3), PartialSquare::UNKNOWN),
            Err(MoveError::Ambiguous { count: 4 })
        );
    }
}
