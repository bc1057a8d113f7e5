//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, BoardCodes, CastlingRights, Color, IllegalMove, Piece, Position, PositionBuilder,
    Square,
};
