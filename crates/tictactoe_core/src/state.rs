//! Immutable game state snapshots.

use crate::action::Move;
use crate::engine;
use crate::error::MoveError;
use crate::input::RawMove;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::phases::Outcome;
use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Complete game state at one point in play.
///
/// A state is never mutated after construction. [`GameState::play`] returns
/// a new state and leaves the receiver untouched, so any number of callers
/// can hold and branch from the same snapshot.
///
/// Deserialized states are checked against [`GameInvariants`]; an
/// inconsistent snapshot is rejected instead of reaching the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    /// Player to move, or the last mover once the game is over.
    pub(crate) current_player: Player,
    /// The board.
    pub(crate) board: Board,
    /// Unmarked positions in ascending order.
    pub(crate) available_positions: Vec<Position>,
    /// Set once a line is completed or the board fills.
    pub(crate) is_over: bool,
    /// Full board, no winning line.
    pub(crate) is_draw: bool,
    /// Player who completed a winning line.
    pub(crate) winner: Option<Player>,
    /// Moves applied so far.
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates the opening state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            current_player: Player::FIRST,
            board: Board::new(),
            available_positions: Position::ALL.to_vec(),
            is_over: false,
            is_draw: false,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the unmarked positions in ascending order.
    pub fn available_positions(&self) -> &[Position] {
        &self.available_positions
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// True if the game ended with a full board and no winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Returns the winner, if a line was completed.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns how the game ended, or `None` while it is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.is_over, self.winner) {
            (false, _) => None,
            (true, Some(player)) => Some(Outcome::Winner(player)),
            (true, None) => Some(Outcome::Draw),
        }
    }

    /// Applies one move. See [`engine::play`].
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the move is rejected.
    pub fn play(&self, raw: impl Into<RawMove>) -> Result<GameState, MoveError> {
        engine::play(self, raw)
    }

    /// Applies moves left to right. See [`engine::play_all`].
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] raised; later moves are not applied.
    pub fn play_all<I>(&self, moves: I) -> Result<GameState, MoveError>
    where
        I: IntoIterator,
        I::Item: Into<RawMove>,
    {
        engine::play_all(self, moves)
    }

    /// Rebuilds a state by playing `positions` from the opening state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::PositionTaken`] if a position repeats before the
    /// game ends.
    pub fn replay(positions: &[Position]) -> Result<GameState, MoveError> {
        engine::play_all(&engine::start(), positions.iter().copied())
    }
}

/// Wire shape of [`GameState`], before the invariants are checked.
#[derive(Deserialize)]
struct GameStateRepr {
    current_player: Player,
    board: Board,
    available_positions: Vec<Position>,
    is_over: bool,
    is_draw: bool,
    winner: Option<Player>,
    history: Vec<Move>,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = String;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let state = GameState {
            current_player: repr.current_player,
            board: repr.board,
            available_positions: repr.available_positions,
            is_over: repr.is_over,
            is_draw: repr.is_draw,
            winner: repr.winner,
            history: repr.history,
        };
        GameInvariants::check_all(&state).map_err(|violations| {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            format!("inconsistent game state: {}", reasons.join("; "))
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_follows_flags() {
        let state = GameState::new();
        assert_eq!(state.outcome(), None);

        let won = GameState::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        assert_eq!(won.outcome(), Some(Outcome::Winner(Player::X)));
        assert_eq!(won.outcome().and_then(|o| o.winner()), won.winner());
    }

    #[test]
    fn test_serde_uses_position_numbers() {
        let state = GameState::new().play(5).unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["available_positions"], serde_json::json!([1, 2, 3, 4, 6, 7, 8, 9]));
        assert_eq!(json["history"][0]["position"], serde_json::json!(5));
        assert_eq!(json["current_player"], serde_json::json!("O"));

        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_state() {
        let mut json = serde_json::to_value(GameState::new()).unwrap();
        json["available_positions"] = serde_json::json!([]);

        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("inconsistent game state"));
    }

    #[test]
    fn test_deserialize_rejects_forged_winner() {
        let mut json = serde_json::to_value(GameState::new().play(1).unwrap()).unwrap();
        json["winner"] = serde_json::json!("X");
        json["is_over"] = serde_json::json!(true);

        assert!(serde_json::from_value::<GameState>(json).is_err());
    }
}
