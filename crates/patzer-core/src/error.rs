//! Error types for notation parsing and move resolution.

/// Errors from parsing a move in algebraic notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The destination rank letter (a–h) is missing.
    #[error("expected rank of destination square")]
    ExpectedDestinationRank,
    /// The destination file digit (1–8) is missing.
    #[error("expected file of destination square")]
    ExpectedDestinationFile,
    /// A promotion was required but the promotion piece letter is missing
    /// or not one of N, B, R, Q.
    #[error("invalid promotion specified")]
    InvalidPromotion,
}

/// Errors from processing a move end to end.
///
/// All variants are recoverable: the board is left untouched and the same
/// side remains to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The notation itself was malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// No piece of the requested kind and side can reach the destination.
    #[error("no pieces found to perform specified move")]
    NoPieceFound,
    /// More than one piece of the requested kind and side can reach the
    /// destination under the given constraints.
    #[error("ambiguous move; found {count} possibilities")]
    Ambiguous {
        /// Number of qualifying pieces found.
        count: usize,
    },
}
