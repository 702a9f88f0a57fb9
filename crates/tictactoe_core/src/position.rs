//! Board positions, numbered 1-9 left-to-right, top-to-bottom.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};

/// Smallest valid position number.
pub const MIN_POSITION: u8 = 1;
/// Largest valid position number.
pub const MAX_POSITION: u8 = 9;

/// A position on the tic-tac-toe board.
///
/// Positions are numbered 1-9 for players and adapters; the board stores
/// them at [`Position::index`] (0-8). Serialized as the 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Position {
    /// Top-left (position 1)
    TopLeft,
    /// Top-center (position 2)
    TopCenter,
    /// Top-right (position 3)
    TopRight,
    /// Middle-left (position 4)
    MiddleLeft,
    /// Center (position 5)
    Center,
    /// Middle-right (position 6)
    MiddleRight,
    /// Bottom-left (position 7)
    BottomLeft,
    /// Bottom-center (position 8)
    BottomCenter,
    /// Bottom-right (position 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board slot for this position (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Player-facing number for this position (1-9).
    pub fn number(self) -> u8 {
        self as u8 + MIN_POSITION
    }

    /// Creates a position from its 1-based number.
    pub fn from_number(number: u8) -> Option<Self> {
        if (MIN_POSITION..=MAX_POSITION).contains(&number) {
            Self::from_index(usize::from(number - MIN_POSITION))
        } else {
            None
        }
    }

    /// Creates a position from its board slot.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.number()
    }
}

impl TryFrom<u8> for Position {
    type Error = MoveError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Position::from_number(number).ok_or(MoveError::InvalidPosition)
    }
}
