//! Untrusted move tokens handed to the engine by input sources.

use crate::error::MoveError;
use crate::position::{MAX_POSITION, MIN_POSITION, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move as received from an input source, before validation.
///
/// Input sources pass along whatever they got (a parsed integer, a float,
/// or raw text) and the engine decides whether it names a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
pub enum RawMove {
    /// An integer token.
    Integer(i64),
    /// A floating-point token (may be NaN or infinite).
    Float(f64),
    /// Unparsed text.
    Text(String),
}

impl RawMove {
    /// Resolves the token to a board position.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidInput`] if the token is not a finite number.
    /// - [`MoveError::InvalidPosition`] if it is a number outside 1-9 or not
    ///   a whole number.
    #[instrument(level = "trace")]
    pub fn to_position(&self) -> Result<Position, MoveError> {
        match self {
            RawMove::Integer(n) => position_from_integer(*n),
            RawMove::Float(x) => position_from_float(*x),
            RawMove::Text(text) => {
                let text = text.trim();
                if let Ok(n) = text.parse::<i64>() {
                    position_from_integer(n)
                } else if let Ok(x) = text.parse::<f64>() {
                    position_from_float(x)
                } else {
                    Err(MoveError::InvalidInput)
                }
            }
        }
    }
}

fn position_from_integer(n: i64) -> Result<Position, MoveError> {
    u8::try_from(n)
        .ok()
        .and_then(Position::from_number)
        .ok_or(MoveError::InvalidPosition)
}

fn position_from_float(x: f64) -> Result<Position, MoveError> {
    if !x.is_finite() {
        return Err(MoveError::InvalidInput);
    }
    if x.fract() != 0.0 || x < f64::from(MIN_POSITION) || x > f64::from(MAX_POSITION) {
        return Err(MoveError::InvalidPosition);
    }
    // In range and whole, so the cast is exact.
    position_from_integer(x as i64)
}

impl From<i32> for RawMove {
    fn from(n: i32) -> Self {
        RawMove::Integer(i64::from(n))
    }
}

impl From<u8> for RawMove {
    fn from(n: u8) -> Self {
        RawMove::Integer(i64::from(n))
    }
}

impl From<u32> for RawMove {
    fn from(n: u32) -> Self {
        RawMove::Integer(i64::from(n))
    }
}

impl From<usize> for RawMove {
    fn from(n: usize) -> Self {
        // Anything past i64::MAX is still a number, just far out of range.
        RawMove::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<&str> for RawMove {
    fn from(text: &str) -> Self {
        RawMove::Text(text.to_string())
    }
}

impl From<Position> for RawMove {
    fn from(pos: Position) -> Self {
        RawMove::Integer(i64::from(pos.number()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_in_range() {
        assert_eq!(RawMove::from(1).to_position(), Ok(Position::TopLeft));
        assert_eq!(RawMove::from(9u8).to_position(), Ok(Position::BottomRight));
    }

    #[test]
    fn test_integers_out_of_range() {
        for n in [0i64, 10, -1, i64::MAX, i64::MIN] {
            assert_eq!(RawMove::Integer(n).to_position(), Err(MoveError::InvalidPosition));
        }
    }

    #[test]
    fn test_huge_usize_is_out_of_range() {
        assert_eq!(RawMove::from(usize::MAX), RawMove::Integer(i64::MAX));
        assert_eq!(
            RawMove::from(usize::MAX).to_position(),
            Err(MoveError::InvalidPosition)
        );
    }

    #[test]
    fn test_non_finite_is_invalid_input() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(RawMove::from(x).to_position(), Err(MoveError::InvalidInput));
        }
    }

    #[test]
    fn test_floats() {
        assert_eq!(RawMove::from(5.0).to_position(), Ok(Position::Center));
        assert_eq!(RawMove::from(2.5).to_position(), Err(MoveError::InvalidPosition));
        assert_eq!(RawMove::from(9.5).to_position(), Err(MoveError::InvalidPosition));
    }

    #[test]
    fn test_text_tokens() {
        assert_eq!(RawMove::from(" 7 ").to_position(), Ok(Position::BottomLeft));
        assert_eq!(RawMove::from("abc").to_position(), Err(MoveError::InvalidInput));
        assert_eq!(RawMove::from("").to_position(), Err(MoveError::InvalidInput));
        assert_eq!(RawMove::from("NaN").to_position(), Err(MoveError::InvalidInput));
        assert_eq!(RawMove::from("10").to_position(), Err(MoveError::InvalidPosition));
        assert_eq!(RawMove::from("3.0").to_position(), Ok(Position::TopRight));
    }
}
