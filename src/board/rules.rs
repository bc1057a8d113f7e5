//! Per-piece movement rules.
//!
//! [`Board::reaches`] is the pure pattern-and-capture predicate shared by move
//! validation and attack detection. It knows nothing about turns, king safety
//! or castling. [`Position::legal_shape`] layers castling on top for kings.

use super::state::KING_START_COL;
use super::{Board, Color, Piece, Position, Square};

/// Corner the castling rook starts on and the square it lands on.
#[inline]
pub(crate) fn castling_rook_squares(home_row: usize, kingside: bool) -> (Square, Square) {
    if kingside {
        (Square(home_row, 7), Square(home_row, KING_START_COL + 1))
    } else {
        (Square(home_row, 0), Square(home_row, KING_START_COL - 1))
    }
}

/// A king move of exactly two columns along a row.
#[inline]
pub(crate) fn is_castling_step(piece: Piece, from: Square, to: Square) -> bool {
    piece == Piece::King && from.row() == to.row() && from.delta(to).1.abs() == 2
}

impl Board {
    /// Whether a `color` `piece` on `from` may move to (or capture on) `to`
    /// by its movement pattern alone.
    #[must_use]
    pub fn reaches(
        &self,
        color: Color,
        piece: Piece,
        from: Square,
        to: Square,
        en_passant_target: Option<Square>,
    ) -> bool {
        if !to.in_bounds() || from == to {
            return false;
        }
        let (d_row, d_col) = from.delta(to);
        match piece {
            Piece::Pawn => self.pawn_reaches(color, from, to, en_passant_target),
            Piece::Knight => matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2)),
            Piece::Bishop => self.diagonal_clear(from, to),
            Piece::Rook => self.straight_clear(from, to),
            Piece::Queen => self.straight_clear(from, to) || self.diagonal_clear(from, to),
            Piece::King => d_row.abs() <= 1 && d_col.abs() <= 1,
        }
    }

    fn pawn_reaches(
        &self,
        color: Color,
        from: Square,
        to: Square,
        en_passant_target: Option<Square>,
    ) -> bool {
        let dir = color.pawn_direction();
        let (d_row, d_col) = from.delta(to);

        if d_col == 0 && d_row == dir {
            return self.is_empty(to);
        }

        if d_col == 0 && d_row == 2 * dir && from.row() == color.pawn_start_row() {
            return match from.offset(dir, 0) {
                Some(skipped) => self.is_empty(skipped) && self.is_empty(to),
                None => false,
            };
        }

        if d_col.abs() == 1 && d_row == dir {
            return match self.color_on(to) {
                Some(occupant) => occupant != color,
                None => en_passant_target == Some(to),
            };
        }

        false
    }
}

impl Position {
    /// Shape legality of moving the piece on `from` to `to`, ignoring whose
    /// turn it is and whether the mover's king ends up attacked.
    ///
    /// Castling is included here, so its conditions (rights, rook on the
    /// corner, clear path, no attacked square on the king's way) all fold into
    /// a single yes/no answer.
    #[must_use]
    pub fn legal_shape(&self, from: Square, to: Square) -> bool {
        let Some((color, piece)) = self.piece_at(from) else {
            return false;
        };
        if is_castling_step(piece, from, to) {
            return self.can_castle(color, from, to);
        }
        self.board.reaches(color, piece, from, to, self.en_passant_target)
    }

    fn can_castle(&self, color: Color, from: Square, to: Square) -> bool {
        let home_row = color.home_row();
        if from != Square(home_row, KING_START_COL) || !to.in_bounds() {
            return false;
        }

        let kingside = to.col() > from.col();
        if !self.castling_rights.has(color, kingside) {
            return false;
        }

        let (corner, _) = castling_rook_squares(home_row, kingside);
        if self.board.piece_at(corner) != Some((color, Piece::Rook)) {
            return false;
        }

        if self.square_attacked(from, color) || !self.board.straight_clear(from, corner) {
            return false;
        }

        let step = if kingside { 1 } else { -1 };
        match from.offset(0, step) {
            Some(passed) => !self.square_attacked(passed, color) && !self.square_attacked(to, color),
            None => false,
        }
    }
}
