//! Full move legality.
//!
//! Checks run in a fixed order so the same bad move always reports the same
//! reason: turn, destination bounds, own-piece capture, origin occupancy,
//! piece shape, and finally king safety on the simulated position. An empty
//! origin fails the turn check first, so it reads as "Not your turn".

use super::{IllegalMove, Position, Square, UnmakeInfo};

impl Position {
    /// Decide whether the side to move may play `from` -> `to`.
    ///
    /// Never changes `self`; the king-safety step runs make/unmake on a
    /// scratch copy.
    pub fn validate(&self, from: Square, to: Square) -> Result<(), IllegalMove> {
        let mut scratch = *self;
        scratch.validate_in_place(from, to)
    }

    /// Like [`Position::validate`] but simulates on `self`, restoring it
    /// before returning. Used by searches that try many moves on one copy.
    pub(crate) fn validate_in_place(&mut self, from: Square, to: Square) -> Result<(), IllegalMove> {
        self.check_shape(from, to)?;

        let mover = self.side_to_move;
        let info = self.make_move(from, to).ok_or(IllegalMove::NoPieceToMove)?;
        let exposed = self.in_check(mover);
        self.unmake_move(info);

        if exposed {
            Err(IllegalMove::KingExposedToCheck)
        } else {
            Ok(())
        }
    }

    /// Every check except king safety.
    fn check_shape(&self, from: Square, to: Square) -> Result<(), IllegalMove> {
        let mover = self.side_to_move;
        let origin = self.piece_at(from);
        if origin.map(|(color, _)| color) != Some(mover) {
            return Err(IllegalMove::NotYourTurn);
        }
        if !to.in_bounds() {
            return Err(IllegalMove::OutOfBounds);
        }
        if self.board.color_on(to) == Some(mover) {
            return Err(IllegalMove::OwnPieceCapture);
        }
        if origin.is_none() {
            return Err(IllegalMove::NoPieceToMove);
        }
        if !self.legal_shape(from, to) {
            return Err(IllegalMove::IllegalShape);
        }
        Ok(())
    }

    /// Validate and commit a move: the board changes, the en passant target
    /// is set or cleared, and the turn passes to the opponent.
    pub fn play(&mut self, from: Square, to: Square) -> Result<UnmakeInfo, IllegalMove> {
        self.validate(from, to)?;
        let info = self.make_move(from, to).ok_or(IllegalMove::NoPieceToMove)?;
        self.toggle_side();
        Ok(info)
    }
}
