//! Geometric reachability: can the piece on one square reach another?

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Return whether the piece on `start` can geometrically reach `end`.
    ///
    /// Returns `false` if `start` is empty. Movement shape and sliding-piece
    /// blocking are checked; capture legality is not. Notably, a pawn is
    /// reported able to step diagonally forward even when there is nothing
    /// there to capture, so this function doubles as an "is this square
    /// attacked by that piece" test. Callers that care about move legality
    /// must verify capturability themselves.
    pub fn is_reachable(&self, start: Square, end: Square) -> bool {
        let Some(piece) = self.piece_at(start) else {
            return false;
        };

        let rank_delta = end.rank() as i8 - start.rank() as i8;
        let file_delta = end.file() as i8 - start.file() as i8;
        let rank_diff = rank_delta.abs();
        let file_diff = file_delta.abs();

        match piece.kind() {
            PieceKind::Pawn => {
                let dir = piece.color().pawn_direction();
                if rank_diff <= 1 && file_delta == dir {
                    // Single step forward or either diagonal.
                    true
                } else if rank_diff == 0 && file_delta == 2 * dir {
                    // Double advance: only from the start, over an empty square.
                    // The destination square itself is not checked here.
                    !piece.has_moved()
                        && start
                            .offset(0, dir)
                            .is_some_and(|mid| self.piece_at(mid).is_none())
                } else {
                    false
                }
            }
            PieceKind::Knight => {
                (rank_diff == 2 && file_diff == 1) || (rank_diff == 1 && file_diff == 2)
            }
            PieceKind::King => rank_diff <= 1 && file_diff <= 1,
            PieceKind::Bishop => rank_diff == file_diff && self.path_is_clear(start, end),
            PieceKind::Rook => {
                (rank_diff == 0 || file_diff == 0) && self.path_is_clear(start, end)
            }
            PieceKind::Queen => {
                (rank_diff == file_diff || rank_diff == 0 || file_diff == 0)
                    && self.path_is_clear(start, end)
            }
        }
    }

    /// Return whether every square strictly between `start` and `end` is empty.
    ///
    /// Walks one square at a time along the unit direction from `start`
    /// toward `end`; the caller guarantees the two squares share a rank,
    /// file, or diagonal.
    fn path_is_clear(&self, start: Square, end: Square) -> bool {
        let rank_step = (end.rank() as i8 - start.rank() as i8).signum();
        let file_step = (end.file() as i8 - start.file() as i8).signum();

        let mut sq = start;
        loop {
            sq = match sq.offset(rank_step, file_step) {
                Some(next) => next,
                None => return true,
            };
            if sq == end {
                return true;
            }
            if self.piece_at(sq).is_some() {
                return false;
            }
        }
    }
}
