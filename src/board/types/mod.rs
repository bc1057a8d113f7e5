//! Core chess types.
//!
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, column) board coordinate
//! - `CastlingRights` - castling state

mod castling;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use piece::{Color, Piece};
pub use square::{Square, BOARD_SIZE};
