//! Move execution: the sole mutation path for the board.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::ResolvedMove;
use crate::error::MoveError;
use crate::notation::parse;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Move the piece on `start` to `end`, capturing by replacement.
    ///
    /// The moved piece is marked as having moved, the en passant marker is
    /// cleared (and re-set to `end` when a pawn advances two squares), and
    /// the side to move flips. No legality checking happens here; callers
    /// validate first.
    pub fn move_piece(&mut self, start: Square, end: Square) {
        let Some(mut piece) = self.take(start) else {
            return;
        };

        let double_advance = piece.kind() == PieceKind::Pawn
            && start.rank() == end.rank()
            && (end.file() as i8 - start.file() as i8).abs() == 2;
        self.set_en_passant(if double_advance { Some(end) } else { None });

        piece.mark_moved();
        self.put(end, piece);
        self.flip_side_to_move();
    }

    /// Apply a fully resolved move.
    pub fn execute(&mut self, mv: ResolvedMove) {
        self.move_piece(mv.start, mv.end);
    }

    /// Parse, resolve, and execute one move given in algebraic notation.
    ///
    /// A failure at the parse or resolve stage returns before anything is
    /// mutated, so on error the board is unchanged and the same side is
    /// still to move. A parsed promotion kind is accepted but not applied;
    /// the moved pawn keeps its kind.
    pub fn process_move(&mut self, input: &str) -> Result<(), MoveError> {
        let request = parse(input, self.side_to_move())?;
        let start = self.resolve_start(request.kind, request.end, request.start)?;
        let mv = ResolvedMove {
            start,
            end: request.end,
        };
        debug!(kind = %request.kind, start = %mv.start, end = %mv.end, "executing move");
        self.execute(mv);
        Ok(())
    }
}
