//! Straight-line and diagonal path clearance.
//!
//! Only occupancy matters here; piece identity on the endpoints is the
//! caller's business.

use super::{Board, Square};

impl Board {
    /// True if `from` and `to` share a row or column and every square
    /// strictly between them is empty.
    #[must_use]
    pub fn straight_clear(&self, from: Square, to: Square) -> bool {
        if from == to || (from.row() != to.row() && from.col() != to.col()) {
            return false;
        }
        self.walk_clear(from, to)
    }

    /// True if `from` and `to` lie on a common diagonal and every square
    /// strictly between them is empty.
    #[must_use]
    pub fn diagonal_clear(&self, from: Square, to: Square) -> bool {
        let (d_row, d_col) = from.delta(to);
        if d_row == 0 || d_row.abs() != d_col.abs() {
            return false;
        }
        self.walk_clear(from, to)
    }

    fn walk_clear(&self, from: Square, to: Square) -> bool {
        let (d_row, d_col) = from.delta(to);
        let (step_row, step_col) = (d_row.signum(), d_col.signum());
        let mut current = from;
        loop {
            current = match current.offset(step_row, step_col) {
                Some(next) => next,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }
}
