//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, or from the wire grid a
//! presentation layer keeps.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.king_square(Color::Black), Square(0, 4));
//! ```

use super::{
    Board, BoardCodes, CastlingRights, CodeError, Color, LayoutError, Piece, Position, Square,
};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder: no pieces, White to move, no castling.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        PositionBuilder {
            pieces: start.board.occupied().collect(),
            side_to_move: start.side_to_move,
            castling_rights: start.castling_rights,
            en_passant_target: None,
        }
    }

    /// Create a builder holding the pieces of a wire grid. Castling rights
    /// start empty; add them explicitly if the grid still allows castling.
    pub fn from_codes(codes: &BoardCodes) -> Result<Self, CodeError> {
        let board = Board::try_from(codes)?;
        Ok(PositionBuilder {
            pieces: board.occupied().collect(),
            ..Self::new()
        })
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the position, checking every piece is on the board and each
    /// color has exactly one king.
    pub fn build(self) -> Result<Position, LayoutError> {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            if !square.in_bounds() {
                return Err(LayoutError::OffBoard { square });
            }
            board.set_piece(square, color, piece);
        }

        let mut king_squares = [Square(0, 0); 2];
        for color in Color::BOTH {
            let mut kings = board.kings(color);
            king_squares[color.index()] = kings.next().ok_or(LayoutError::MissingKing { color })?;
            if let Some(square) = kings.next() {
                return Err(LayoutError::ExtraKing { color, square });
            }
        }

        Ok(Position {
            board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target.filter(|sq| sq.in_bounds()),
            king_squares,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build().unwrap();
        assert_eq!(built, Position::new());
    }

    #[test]
    fn test_two_kings() {
        let pos = PositionBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .build()
            .unwrap();

        assert!(pos.board().piece_at(Square(7, 4)).is_some());
        assert!(pos.board().piece_at(Square(0, 4)).is_some());
        assert!(pos.board().piece_at(Square(0, 0)).is_none());
        assert_eq!(pos.castling_rights(), CastlingRights::none());
    }

    #[test]
    fn test_missing_king() {
        let err = PositionBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(err, LayoutError::MissingKing { color: Color::Black });
    }

    #[test]
    fn test_extra_king() {
        let err = PositionBuilder::starting_position()
            .piece(Square(4, 4), Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::ExtraKing {
                color: Color::White,
                square: Square(7, 4)
            }
        );
    }

    #[test]
    fn test_off_board_piece() {
        let err = PositionBuilder::starting_position()
            .piece(Square(8, 0), Color::White, Piece::Rook)
            .build()
            .unwrap_err();
        assert_eq!(err, LayoutError::OffBoard { square: Square(8, 0) });
    }

    #[test]
    fn test_castling_rights() {
        let pos = PositionBuilder::starting_position()
            .no_castling_rights()
            .castle_kingside(Color::White)
            .build()
            .unwrap();

        let rights = pos.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
    }

    #[test]
    fn test_clear_square() {
        let pos = PositionBuilder::starting_position()
            .clear(Square(7, 0))
            .build()
            .unwrap();

        assert!(pos.board().piece_at(Square(7, 0)).is_none());
        assert!(pos.board().piece_at(Square(7, 1)).is_some());
    }

    #[test]
    fn test_from_codes_round_trip() {
        let start = Position::new();
        let codes = BoardCodes::from(start.board());
        let rebuilt = PositionBuilder::from_codes(&codes)
            .unwrap()
            .castling(CastlingRights::all())
            .build()
            .unwrap();
        assert_eq!(rebuilt, start);
    }
}
