//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `scenarios.rs` - Full-game sequences played through `Position::play`
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests


use crate::board::{Position, Square};

/// Play a sequence of moves, panicking with the move index on rejection.
pub(super) fn play_all(position: &mut Position, moves: &[((usize, usize), (usize, usize))]) {
    for (i, &((fr, fc), (tr, tc))) in moves.iter().enumerate() {
        if let Err(reason) = position.play(Square(fr, fc), Square(tr, tc)) {
            panic!("move {i} ({fr},{fc})->({tr},{tc}) rejected: {reason}");
        }
    }
}
