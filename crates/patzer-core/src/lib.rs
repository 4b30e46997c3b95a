//! Core chess types: board representation, notation parsing, and move resolution.

mod board;
mod chess_move;
mod color;
mod error;
mod make_move;
mod notation;
mod piece;
mod piece_kind;
mod reach;
mod resolve;
mod square;

pub use board::{Board, PrettyBoard};
pub use chess_move::{MoveRequest, PartialSquare, ResolvedMove};
pub use color::Color;
pub use error::{MoveError, ParseError};
pub use notation::parse;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
