//! Attack detection.
//!
//! A square is attacked when some enemy piece could move onto it by its
//! movement pattern. The scan uses [`Board::reaches`], which never looks at
//! castling, so checking castling safety cannot recurse back into itself.

use super::{Color, Position, Square};

impl Position {
    /// True if any piece of the opposite color to `defender` can reach `sq`.
    #[must_use]
    pub fn square_attacked(&self, sq: Square, defender: Color) -> bool {
        let attacker = defender.opponent();
        self.board.pieces_of(attacker).any(|(from, piece)| {
            self.board.reaches(attacker, piece, from, sq, self.en_passant_target)
        })
    }

    /// Squares of the pieces attacking `sq` on behalf of `defender`'s opponent.
    #[must_use]
    pub fn attackers_of(&self, sq: Square, defender: Color) -> Vec<Square> {
        let attacker = defender.opponent();
        self.board
            .pieces_of(attacker)
            .filter(|&(from, piece)| {
                self.board.reaches(attacker, piece, from, sq, self.en_passant_target)
            })
            .map(|(from, _)| from)
            .collect()
    }

    /// Whether `color`'s king currently stands on an attacked square.
    #[inline]
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.square_attacked(self.king_square(color), color)
    }
}
