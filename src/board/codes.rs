//! Two-character board encoding shared with the presentation layer.
//!
//! Each cell is `{color}{piece}` (`wP`, `bK`, ...) or `--` when empty. Row 0
//! is Black's back rank, row 7 White's.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, CodeError, Color, Piece, Square, BOARD_SIZE};

/// Marker for an empty cell
pub const EMPTY_CODE: &str = "--";

const PIECE_CODES: [[&str; 6]; 2] = [
    ["wP", "wN", "wB", "wR", "wQ", "wK"],
    ["bP", "bN", "bB", "bR", "bQ", "bK"],
];

#[inline]
const fn piece_slot(piece: Piece) -> usize {
    match piece {
        Piece::Pawn => 0,
        Piece::Knight => 1,
        Piece::Bishop => 2,
        Piece::Rook => 3,
        Piece::Queen => 4,
        Piece::King => 5,
    }
}

/// Wire code of one cell's content
#[must_use]
pub fn cell_code(content: Option<(Color, Piece)>) -> &'static str {
    match content {
        Some((color, piece)) => PIECE_CODES[color.index()][piece_slot(piece)],
        None => EMPTY_CODE,
    }
}

/// Decode one wire cell
pub fn parse_cell(code: &str) -> Result<Option<(Color, Piece)>, CodeError> {
    if code == EMPTY_CODE {
        return Ok(None);
    }
    let mut chars = code.chars();
    let (Some(c), Some(p), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(CodeError::InvalidLength {
            code: code.to_string(),
        });
    };
    let color = Color::from_code(c).ok_or(CodeError::InvalidColor { char: c })?;
    let piece = Piece::from_code(p).ok_or(CodeError::InvalidPiece { char: p })?;
    Ok(Some((color, piece)))
}

/// The 8x8 grid of cell codes as the presentation layer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BoardCodes(pub [[String; BOARD_SIZE]; BOARD_SIZE]);

impl BoardCodes {
    /// Build from any row/cell container, checking the grid is 8x8 and every
    /// cell decodes.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, CodeError> {
        let mut grid: [[String; BOARD_SIZE]; BOARD_SIZE] = Default::default();
        let bad_row = rows.iter().map(Vec::len).find(|&n| n != BOARD_SIZE);
        if rows.len() != BOARD_SIZE || bad_row.is_some() {
            return Err(CodeError::InvalidShape {
                rows: rows.len(),
                cols: bad_row.unwrap_or(BOARD_SIZE),
            });
        }
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let code = cell.as_ref();
                parse_cell(code)?;
                grid[row][col] = code.to_string();
            }
        }
        Ok(BoardCodes(grid))
    }

    /// Code at a square, `None` off the board
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<&str> {
        if sq.in_bounds() {
            Some(self.0[sq.row()][sq.col()].as_str())
        } else {
            None
        }
    }
}

impl From<&Board> for BoardCodes {
    fn from(board: &Board) -> Self {
        let mut grid: [[String; BOARD_SIZE]; BOARD_SIZE] = Default::default();
        for sq in Square::all() {
            grid[sq.row()][sq.col()] = cell_code(board.piece_at(sq)).to_string();
        }
        BoardCodes(grid)
    }
}

impl TryFrom<&BoardCodes> for Board {
    type Error = CodeError;

    fn try_from(codes: &BoardCodes) -> Result<Self, Self::Error> {
        let mut board = Board::empty();
        for sq in Square::all() {
            board.put(sq, parse_cell(&codes.0[sq.row()][sq.col()])?);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            let line: Vec<&str> = cells.iter().map(|&content| cell_code(content)).collect();
            write!(f, "{row} {}", line.join(" "))?;
            writeln!(f)?;
        }
        write!(f, "  ")?;
        let cols: Vec<String> = (0..BOARD_SIZE).map(|c| format!("{c} ")).collect();
        write!(f, "{}", cols.concat().trim_end())
    }
}
