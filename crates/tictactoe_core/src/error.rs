//! Move rejection errors.

use crate::position::Position;
use derive_more::{Display, Error};

/// Message for a move token that is not a number at all.
pub const ERROR_INVALID_INPUT: &str = "Invalid input: enter a number 1-9";
/// Message for a number outside 1-9.
pub const ERROR_INVALID_POSITION: &str = "Invalid position: choose 1-9";
/// Message for a move onto a marked square.
pub const ERROR_POSITION_TAKEN: &str = "Position already taken";

/// Error that can occur when validating a move.
///
/// Messages are stable; adapters match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum MoveError {
    /// The move token could not be read as a number.
    #[display("Invalid input: enter a number 1-9")]
    InvalidInput,

    /// The move is a number, but not one of 1-9.
    #[display("Invalid position: choose 1-9")]
    InvalidPosition,

    /// The square is already marked.
    #[display("Position already taken")]
    PositionTaken {
        /// The occupied position the move targeted.
        position: Position,
    },
}

impl MoveError {
    /// Returns the offending position for [`MoveError::PositionTaken`].
    pub fn position(&self) -> Option<Position> {
        match self {
            MoveError::PositionTaken { position } => Some(*position),
            MoveError::InvalidInput | MoveError::InvalidPosition => None,
        }
    }
}
