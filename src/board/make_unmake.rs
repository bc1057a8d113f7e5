use super::rules::{castling_rook_squares, is_castling_step};
use super::{CastlingRights, Color, Piece, Position, Square};

/// Everything needed to take a move back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) moved: (Color, Piece),
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) capture_square: Square,
    pub(crate) rook_move: Option<(Square, Square)>,
    pub(crate) promoted: bool,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_king_square: Square,
}

impl UnmakeInfo {
    /// Piece removed from the board by this move, if any
    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured
    }

    #[must_use]
    pub fn is_castling(&self) -> bool {
        self.rook_move.is_some()
    }

    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        self.captured.is_some() && self.capture_square != self.to
    }

    #[must_use]
    pub fn is_promotion(&self) -> bool {
        self.promoted
    }
}

impl Position {
    /// Carry out the board side of a move: castling rook, en passant victim,
    /// king cache, castling rights, promotion and the new en passant target.
    ///
    /// The move must already have passed shape validation. Side to move is
    /// left alone; committing callers toggle it themselves. Returns `None`
    /// when `from` holds no piece or either square is off the board.
    pub(crate) fn make_move(&mut self, from: Square, to: Square) -> Option<UnmakeInfo> {
        if !from.in_bounds() || !to.in_bounds() {
            return None;
        }
        let (color, piece) = self.board.piece_at(from)?;

        let mut info = UnmakeInfo {
            from,
            to,
            moved: (color, piece),
            captured: self.board.piece_at(to),
            capture_square: to,
            rook_move: None,
            promoted: false,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_king_square: self.king_square(color),
        };

        if is_castling_step(piece, from, to) {
            let (corner, landing) = castling_rook_squares(from.row(), to.col() > from.col());
            let rook = self.board.remove_piece(corner);
            self.board.put(landing, rook);
            info.rook_move = Some((corner, landing));
        }

        if piece == Piece::Pawn
            && from.col() != to.col()
            && self.en_passant_target == Some(to)
            && self.board.is_empty(to)
        {
            let victim = Square(from.row(), to.col());
            info.captured = self.board.remove_piece(victim);
            info.capture_square = victim;
        }

        let home_row = color.home_row();
        match piece {
            Piece::King => {
                self.king_squares[color.index()] = to;
                self.castling_rights.remove_color(color);
            }
            Piece::Rook if from == Square(home_row, 0) => {
                self.castling_rights.remove(color, false);
            }
            Piece::Rook if from == Square(home_row, 7) => {
                self.castling_rights.remove(color, true);
            }
            _ => {}
        }

        self.board.remove_piece(from);
        if piece == Piece::Pawn && to.row() == color.promotion_row() {
            self.board.set_piece(to, color, Piece::Queen);
            info.promoted = true;
        } else {
            self.board.set_piece(to, color, piece);
        }

        self.en_passant_target = if piece == Piece::Pawn && from.delta(to).0.abs() == 2 {
            from.offset(color.pawn_direction(), 0)
        } else {
            None
        };

        Some(info)
    }

    /// Restore the position exactly as it was before `make_move` produced `info`.
    pub(crate) fn unmake_move(&mut self, info: UnmakeInfo) {
        let (color, piece) = info.moved;

        self.board.remove_piece(info.to);
        self.board.set_piece(info.from, color, piece);
        if let Some((cap_color, cap_piece)) = info.captured {
            self.board.set_piece(info.capture_square, cap_color, cap_piece);
        }

        if let Some((corner, landing)) = info.rook_move {
            let rook = self.board.remove_piece(landing);
            self.board.put(corner, rook);
        }

        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.king_squares[color.index()] = info.previous_king_square;
    }
}
