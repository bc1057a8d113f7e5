//! Board representation and the chess rules built on it.
//!
//! Layers, bottom up: the [`Board`] grid and its path-clearance helpers, the
//! per-piece movement rules, attack detection, the ordered move validator,
//! make/unmake, and finally legal-move enumeration and checkmate detection.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Position, Square};
//!
//! let mut position = Position::new();
//! position.play(Square(6, 4), Square(4, 4)).unwrap();
//! assert_eq!(position.side_to_move(), Color::Black);
//! assert_eq!(position.en_passant_target(), Some(Square(5, 4)));
//! ```

mod attacks;
mod builder;
mod checkmate;
mod codes;
mod error;
mod make_unmake;
mod path;
pub mod prelude;
mod rules;
mod state;
mod types;
mod validate;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use codes::{cell_code, parse_cell, BoardCodes, EMPTY_CODE};
pub use error::{CodeError, IllegalMove, LayoutError, SquareError};
pub use make_unmake::UnmakeInfo;
pub use state::{Board, Position};
pub use types::{CastlingRights, Color, Piece, Square, BOARD_SIZE};
