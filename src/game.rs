//! One chess match: the authoritative position plus its move history.
//!
//! [`Game`] is what a presentation layer talks to. It answers `state()` and
//! `submit_move()` with values that map one-to-one onto the JSON records a
//! web front end exchanges (see [`MoveResponse`]).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{BoardCodes, Color, IllegalMove, Position, Square};

/// Read-only view of a game for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub board: BoardCodes,
    pub current_turn: Color,
    pub in_check: bool,
    pub checkmate: bool,
}

/// What a successful move led to, from the new side to move's view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate,
    Check,
    Moved,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Outcome::Checkmate => "Checkmate!",
            Outcome::Check => "Check!",
            Outcome::Moved => "Move successful",
        };
        f.write_str(msg)
    }
}

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveReport {
    pub board: BoardCodes,
    pub current_turn: Color,
    pub in_check: bool,
    pub checkmate: bool,
    pub outcome: Outcome,
}

/// Flat success/failure record for the presentation layer.
///
/// On failure only `success` and `message` are present.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveResponse {
    pub success: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub board: Option<BoardCodes>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub current_turn: Option<Color>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub in_check: Option<bool>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub checkmate: Option<bool>,
    pub message: String,
}

impl From<Result<MoveReport, IllegalMove>> for MoveResponse {
    fn from(result: Result<MoveReport, IllegalMove>) -> Self {
        match result {
            Ok(report) => MoveResponse {
                success: true,
                message: report.outcome.to_string(),
                board: Some(report.board),
                current_turn: Some(report.current_turn),
                in_check: Some(report.in_check),
                checkmate: Some(report.checkmate),
            },
            Err(reason) => MoveResponse {
                success: false,
                board: None,
                current_turn: None,
                in_check: None,
                checkmate: None,
                message: reason.to_string(),
            },
        }
    }
}

/// A single match from the opening position onward.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Game {
    position: Position,
    history: Vec<(Square, Square)>,
}

impl Game {
    /// New match from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::default()
    }

    /// New match continuing from an arbitrary position, with empty history.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Game {
            position,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Committed moves in the order they were played
    #[must_use]
    pub fn history(&self) -> &[(Square, Square)] {
        &self.history
    }

    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.position.in_check(color)
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.position.is_checkmate(color)
    }

    /// Check a move without playing it.
    pub fn validate(&self, from: Square, to: Square) -> Result<(), IllegalMove> {
        self.position.validate(from, to)
    }

    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.position.legal_destinations(from)
    }

    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        self.position.legal_moves()
    }

    /// Board, side to move and the check/checkmate status of that side.
    #[must_use]
    pub fn state(&self) -> GameSnapshot {
        let side = self.position.side_to_move();
        GameSnapshot {
            board: BoardCodes::from(self.position.board()),
            current_turn: side,
            in_check: self.position.in_check(side),
            checkmate: self.position.is_checkmate(side),
        }
    }

    /// Validate and play a move for the side to move.
    ///
    /// A rejected move leaves the game exactly as it was.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveReport, IllegalMove> {
        let mover = self.position.side_to_move();
        let info = match self.position.play(from, to) {
            Ok(info) => info,
            Err(reason) => {
                engine_log!(debug, "{mover} move {from} -> {to} rejected: {reason}");
                return Err(reason);
            }
        };
        self.history.push((from, to));
        engine_log!(
            debug,
            "{mover} played {from} -> {to} (capture: {}, castling: {}, en passant: {}, promotion: {})",
            info.captured().is_some(),
            info.is_castling(),
            info.is_en_passant(),
            info.is_promotion()
        );

        let side = self.position.side_to_move();
        let in_check = self.position.in_check(side);
        let checkmate = in_check && !self.position.has_legal_move(side);
        let outcome = if checkmate {
            engine_log!(info, "{side} is checkmated after {} moves", self.history.len());
            Outcome::Checkmate
        } else if in_check {
            Outcome::Check
        } else {
            Outcome::Moved
        };

        Ok(MoveReport {
            board: BoardCodes::from(self.position.board()),
            current_turn: side,
            in_check,
            checkmate,
            outcome,
        })
    }

    /// Start over from the standard starting position.
    pub fn reset(&mut self) {
        *self = Game::new();
    }
}
