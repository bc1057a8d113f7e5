//! Legal move enumeration and checkmate detection.
//!
//! Brute force over every (piece, destination) pair with the full validator.
//! The board is fixed at 64 squares, so this stays cheap enough.

use super::{Color, Position, Square};

impl Position {
    /// Every destination the piece on `from` may legally move to.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let mut scratch = *self;
        Square::all()
            .filter(|&to| scratch.validate_in_place(from, to).is_ok())
            .collect()
    }

    /// Every legal (from, to) pair for the side to move, row-major by origin
    /// then destination.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        let mut scratch = *self;
        let origins: Vec<Square> = self
            .board
            .pieces_of(self.side_to_move)
            .map(|(sq, _)| sq)
            .collect();

        let mut moves = Vec::new();
        for from in origins {
            for to in Square::all() {
                if scratch.validate_in_place(from, to).is_ok() {
                    moves.push((from, to));
                }
            }
        }
        moves
    }

    /// True if `color` has at least one legal move, as if it were on move.
    ///
    /// An en passant target belongs to the side on move; searching for the
    /// other side drops it.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        let mut scratch = *self;
        if color != self.side_to_move {
            scratch.side_to_move = color;
            scratch.en_passant_target = None;
        }
        let origins: Vec<Square> = self.board.pieces_of(color).map(|(sq, _)| sq).collect();

        origins.into_iter().any(|from| {
            Square::all().any(|to| scratch.validate_in_place(from, to).is_ok())
        })
    }

    /// `color` is in check and no move of its pieces gets it out.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.in_check(color) && !self.has_legal_move(color)
    }
}
