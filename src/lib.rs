//! Chess rules engine.
//!
//! Keeps the authoritative state of one two-player match and decides whether
//! proposed moves are legal: piece movement, blocked paths, captures, check,
//! checkmate, castling, en passant and promotion.
//!
//! # Example
//! ```
//! use chess_rules::{Game, Outcome, Square};
//!
//! let mut game = Game::new();
//! for (from, to) in [
//!     (Square(6, 5), Square(5, 5)),
//!     (Square(1, 4), Square(3, 4)),
//!     (Square(6, 6), Square(4, 6)),
//! ] {
//!     game.submit_move(from, to).unwrap();
//! }
//! let report = game.submit_move(Square(0, 3), Square(4, 7)).unwrap();
//! assert_eq!(report.outcome, Outcome::Checkmate);
//! ```

#[cfg(feature = "logging")]
macro_rules! engine_log {
    ($level:ident, $($arg:tt)+) => {
        log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_log {
    ($level:ident, $($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}

pub mod board;
pub mod game;
pub mod session;

pub use board::{Board, BoardCodes, Color, IllegalMove, Piece, Position, PositionBuilder, Square};
pub use game::{Game, GameSnapshot, MoveReport, MoveResponse, Outcome};
pub use session::SharedGame;
