//! Shared access to one match.
//!
//! [`Game`] does no locking. When several request handlers serve the same
//! match they go through a [`SharedGame`], which holds the game behind a
//! mutex so at most one submission is in flight at a time.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{IllegalMove, Square};
use crate::game::{Game, GameSnapshot, MoveReport};

/// Cloneable handle to a lock-guarded [`Game`].
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    /// Wrap a game for shared use.
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    #[must_use]
    pub fn state(&self) -> GameSnapshot {
        self.0.lock().state()
    }

    /// Validate and play a move while holding the lock for the whole
    /// transition.
    pub fn submit_move(&self, from: Square, to: Square) -> Result<MoveReport, IllegalMove> {
        self.0.lock().submit_move(from, to)
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// Replace the match with a fresh one.
    pub fn reset(&self) {
        self.0.lock().reset();
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
