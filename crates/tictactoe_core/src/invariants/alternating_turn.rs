//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: Players alternate turns.
///
/// History must open with X and alternate. While the game runs the player
/// to move is the opponent of the last mover; once it is over the last
/// mover stays current.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(last) = history.last() else {
            return game.current_player() == Player::FIRST;
        };

        if history[0].player != Player::FIRST {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let expected = if game.is_over() {
            last.player
        } else {
            last.player.opponent()
        };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
