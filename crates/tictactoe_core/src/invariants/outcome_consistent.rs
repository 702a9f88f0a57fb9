//! Outcome consistency: the over/draw/winner flags agree with the board.

use super::Invariant;
use crate::GameState;
use crate::rules::check_winner;

/// Invariant: `is_over`, `is_draw` and `winner` are consistent.
///
/// - `winner` is whoever holds a complete line, if anyone
/// - `is_over` is a winner or no available positions
/// - `is_draw` is over with no winner
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let winner_matches = game.winner() == check_winner(game.board());
        let over_matches =
            game.is_over() == (game.winner().is_some() || game.available_positions().is_empty());
        let draw_matches = game.is_draw() == (game.is_over() && game.winner().is_none());

        winner_matches && over_matches && draw_matches
    }

    fn description() -> &'static str {
        "Game over, draw and winner flags agree with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, start};

    #[test]
    fn test_holds_for_win_and_draw() {
        let won = start().play_all([1, 2, 3, 5, 7, 8]).unwrap();
        assert!(OutcomeConsistentInvariant::holds(&won));

        let drawn = start().play_all([1, 2, 3, 5, 6, 4, 7, 9, 8]).unwrap();
        assert!(OutcomeConsistentInvariant::holds(&drawn));
    }

    #[test]
    fn test_draw_with_winner_violates() {
        let mut game = start().play_all([1, 4, 2, 5, 3]).unwrap();
        game.is_draw = true;
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_missing_winner_violates() {
        let mut game = start().play_all([1, 4, 2, 5, 3]).unwrap();
        assert_eq!(game.winner(), Some(Player::X));
        game.winner = None;
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }
}
