//! Tolerant algebraic-notation parsing.
//!
//! The dialect accepted here is deliberately lenient: leading whitespace is
//! skipped, a capture marker `x` is consumed whether or not anything is
//! captured, and trailing decorations such as `+` or `#` are ignored. The
//! parser only pins down what the text actually says; deducing an
//! unspecified starting square is the resolver's job.

use crate::chess_move::{MoveRequest, PartialSquare};
use crate::color::Color;
use crate::error::ParseError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Convert a board letter a–h to its zero-based rank.
fn rank_letter(b: Option<&u8>) -> Option<u8> {
    match b {
        Some(&b) if (b'a'..=b'h').contains(&b) => Some(b - b'a'),
        _ => None,
    }
}

/// Convert a board digit 1–8 to its zero-based file.
fn file_digit(b: Option<&u8>) -> Option<u8> {
    match b {
        Some(&b) if (b'1'..=b'8').contains(&b) => Some(b - b'1'),
        _ => None,
    }
}

/// Parse a move written in algebraic notation for the given side to move.
///
/// The grammar, left to right: an optional piece letter (absent means pawn),
/// an optional `x`, an optional starting-file digit, then the destination
/// square. A letter+digit pair following the destination means what was
/// parsed so far was actually the starting square and the new pair is the
/// real destination. A pawn arriving on its promotion file must be followed
/// by an optional `=` and a promotion letter (N, B, R, or Q).
///
/// The side to move is only consulted for the promotion-file check.
pub fn parse(input: &str, side: Color) -> Result<MoveRequest, ParseError> {
    let bytes = input.trim_start().as_bytes();
    let mut pos = 0usize;

    // Optional piece letter; pawns are written bare.
    let kind = match bytes.first().and_then(|&b| PieceKind::from_letter(b as char)) {
        Some(kind) => {
            pos += 1;
            kind
        }
        None => PieceKind::Pawn,
    };

    // Capture marker carries no meaning here.
    if bytes.get(pos) == Some(&b'x') {
        pos += 1;
    }

    let mut start = PartialSquare::UNKNOWN;

    // A digit before any letter can only be a starting file.
    if let Some(file) = file_digit(bytes.get(pos)) {
        start.file = Some(file);
        pos += 1;
    }

    let mut end_rank = match rank_letter(bytes.get(pos)) {
        Some(rank) => {
            pos += 1;
            rank
        }
        None => return Err(ParseError::ExpectedDestinationRank),
    };

    // Two letters in a row: the first was the starting rank.
    if let Some(rank) = rank_letter(bytes.get(pos)) {
        start.rank = Some(end_rank);
        end_rank = rank;
        pos += 1;
    }

    let mut end_file = match file_digit(bytes.get(pos)) {
        Some(file) => {
            pos += 1;
            file
        }
        None => return Err(ParseError::ExpectedDestinationFile),
    };

    // A further letter+digit pair demotes the pair parsed so far to the
    // starting square.
    if let Some(rank) = rank_letter(bytes.get(pos)) {
        pos += 1;
        start.rank = Some(end_rank);
        end_rank = rank;
        match file_digit(bytes.get(pos)) {
            Some(file) => {
                pos += 1;
                start.file = Some(end_file);
                end_file = file;
            }
            None => return Err(ParseError::ExpectedDestinationFile),
        }
    }

    let end = Square::new(end_rank, end_file);

    let mut promotion = None;
    if kind == PieceKind::Pawn && end.file() == side.promotion_file() {
        if bytes.get(pos) == Some(&b'=') {
            pos += 1;
        }
        promotion = match bytes.get(pos).map(|&b| b as char) {
            Some('N') => Some(PieceKind::Knight),
            Some('B') => Some(PieceKind::Bishop),
            Some('R') => Some(PieceKind::Rook),
            Some('Q') => Some(PieceKind::Queen),
            _ => return Err(ParseError::InvalidPromotion),
        };
    }

    // Anything left over ('+', '#', annotations) is ignored.
    Ok(MoveRequest {
        kind,
        start,
        end,
        promotion,
    })
}
