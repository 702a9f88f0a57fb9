//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`. The precondition side is the move
//! validation order callers observe; the postcondition side checks that a
//! transition kept every game invariant.

use crate::error::MoveError;
use crate::input::RawMove;
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use crate::state::GameState;
use crate::types::Square;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a passing precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    ///
    /// # Errors
    ///
    /// Returns the first failing precondition.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// # Errors
    ///
    /// Returns every violated postcondition.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the token names a position 1-9.
pub struct NamesPosition;

impl NamesPosition {
    /// Resolves the token, rejecting non-numbers before out-of-range numbers.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidInput`] or [`MoveError::InvalidPosition`].
    pub fn check(raw: &RawMove) -> Result<Position, MoveError> {
        raw.to_position()
    }
}

/// Precondition: the square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// # Errors
    ///
    /// [`MoveError::PositionTaken`] if the square is marked.
    pub fn check(position: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::PositionTaken { position })
        }
    }
}

/// Composite precondition, in the order callers rely on.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    ///
    /// # Errors
    ///
    /// The first failing precondition.
    #[instrument(level = "trace", skip(state))]
    pub fn check(raw: &RawMove, state: &GameState) -> Result<Position, MoveError> {
        let position = NamesPosition::check(raw)?;
        SquareIsEmpty::check(position, state)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - Marks already on the board are unchanged
/// - Exactly one move was appended to the history
/// - The player to move changed, unless the game just ended
/// - The full invariant set holds on the new state
pub struct MoveContract;

impl Contract<GameState, RawMove> for MoveContract {
    type Checked = Position;

    fn pre(state: &GameState, action: &RawMove) -> Result<Position, MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GameInvariants::check_all(after).err().unwrap_or_default();

        let overwritten = Position::ALL.iter().any(|pos| {
            let old = before.board().get(*pos);
            old != Square::Empty && old != after.board().get(*pos)
        });
        if overwritten {
            violations.push(InvariantViolation::new("Marked squares were overwritten"));
        }

        if after.history().len() != before.history().len() + 1
            || !after.history().starts_with(before.history())
        {
            violations.push(InvariantViolation::new("History did not grow by exactly one move"));
        }

        let turn_passed = after.current_player() != before.current_player();
        if turn_passed == after.is_over() {
            violations.push(InvariantViolation::new(
                "Turn must pass while play continues and freeze when the game ends",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, start};

    #[test]
    fn test_precondition_empty_square() {
        let game = start();
        assert_eq!(
            MoveContract::pre(&game, &RawMove::from(5)),
            Ok(Position::Center)
        );
    }

    #[test]
    fn test_precondition_order() {
        let game = start().play(5).unwrap();
        assert_eq!(
            MoveContract::pre(&game, &RawMove::from("five")),
            Err(MoveError::InvalidInput)
        );
        assert_eq!(
            MoveContract::pre(&game, &RawMove::from(0)),
            Err(MoveError::InvalidPosition)
        );
        assert_eq!(
            MoveContract::pre(&game, &RawMove::from(5)),
            Err(MoveError::PositionTaken {
                position: Position::Center
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = start();
        let after = before.play(1).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_holds_on_winning_move() {
        let before = start().play_all([1, 4, 2, 5]).unwrap();
        let after = before.play(3).unwrap();
        assert!(after.is_over());
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let before = start().play(5).unwrap();
        let mut after = before.play(1).unwrap();
        after.board.set(Position::Center, Square::Occupied(Player::O));

        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == "Marked squares were overwritten")
        );
    }

    #[test]
    fn test_postcondition_detects_skipped_turn() {
        let before = start();
        let mut after = before.play(1).unwrap();
        after.current_player = Player::X;
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
