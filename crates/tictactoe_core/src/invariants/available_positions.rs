//! Available positions invariant: the free list mirrors the board.

use super::Invariant;
use crate::GameState;

/// Invariant: available positions are exactly the empty squares, ascending.
pub struct AvailablePositionsInvariant;

impl Invariant<GameState> for AvailablePositionsInvariant {
    fn holds(game: &GameState) -> bool {
        game.available_positions() == game.board().empty_positions().as_slice()
    }

    fn description() -> &'static str {
        "Available positions match the empty squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::start;

    #[test]
    fn test_holds_through_a_game() {
        let mut game = start();
        for pos in [5, 1, 9, 3, 2] {
            game = game.play(pos).unwrap();
            assert!(AvailablePositionsInvariant::holds(&game));
        }
    }

    #[test]
    fn test_stale_entry_violates() {
        let mut game = start().play(5).unwrap();
        game.available_positions.push(crate::Position::Center);
        assert!(!AvailablePositionsInvariant::holds(&game));
    }
}
