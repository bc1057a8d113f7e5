//! Error types for chess board operations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Square};

/// Why a proposed move was rejected.
///
/// These are ordinary outcomes of validation, reported to the caller as a
/// reason string; none of them indicates a fault in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IllegalMove {
    /// The origin square holds no piece (or lies off the board)
    NoPieceToMove,
    /// The piece on the origin square belongs to the side not on move
    NotYourTurn,
    /// The destination lies outside the 8x8 board
    OutOfBounds,
    /// The destination holds a piece of the mover's own color
    OwnPieceCapture,
    /// The piece cannot move that way (pattern, blocked path, failed castling)
    IllegalShape,
    /// The move would leave the mover's king attacked
    KingExposedToCheck,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            IllegalMove::NoPieceToMove => "No piece to move",
            IllegalMove::NotYourTurn => "Not your turn",
            IllegalMove::OutOfBounds => "Move outside board",
            IllegalMove::OwnPieceCapture => "Cannot capture own piece",
            IllegalMove::IllegalShape => "Invalid move for this piece",
            IllegalMove::KingExposedToCheck => "Move would put/leave king in check",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for IllegalMove {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Not of the form `row,col`
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}', expected 'row,col'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for decoding the two-character wire cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// Cell is not exactly two characters
    InvalidLength { code: String },
    /// First character is not 'w' or 'b'
    InvalidColor { char: char },
    /// Second character is not one of P, N, B, R, Q, K
    InvalidPiece { char: char },
    /// Grid does not have 8 rows of 8 cells
    InvalidShape { rows: usize, cols: usize },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeError::InvalidLength { code } => {
                write!(f, "Board cell '{code}' must be two characters")
            }
            CodeError::InvalidColor { char } => {
                write!(f, "Invalid color character '{char}', expected 'w' or 'b'")
            }
            CodeError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}'")
            }
            CodeError::InvalidShape { rows, cols } => {
                write!(f, "Board must be 8x8, found {rows} rows with a row of {cols} cells")
            }
        }
    }
}

impl std::error::Error for CodeError {}

/// Error type for positions that break the one-king-per-color invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    MissingKing { color: Color },
    /// A piece was placed outside the 8x8 board
    OffBoard { square: Square },
    ExtraKing { color: Color, square: Square },
    /// The wire grid itself could not be decoded
    Code(CodeError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MissingKing { color } => write!(f, "{color} has no king"),
            LayoutError::OffBoard { square } => write!(f, "Square {square} is off the board"),
            LayoutError::ExtraKing { color, square } => {
                write!(f, "{color} has a second king on {square}")
            }
            LayoutError::Code(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Code(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CodeError> for LayoutError {
    fn from(err: CodeError) -> Self {
        LayoutError::Code(err)
    }
}
