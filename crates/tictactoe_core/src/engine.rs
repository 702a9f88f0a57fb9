//! The game state machine: `start` and `play`.
//!
//! Moves are validated in a fixed order, and callers depend on it:
//!
//! 1. A finished game absorbs the move and comes back unchanged.
//! 2. A token that is not a finite number is [`MoveError::InvalidInput`].
//! 3. A number outside 1-9 is [`MoveError::InvalidPosition`].
//! 4. A marked square is [`MoveError::PositionTaken`].
//!
//! Anything else marks the square for the current player and produces a
//! new state.

use crate::action::Move;
use crate::contracts::{Contract, MoveContract};
use crate::error::MoveError;
use crate::input::RawMove;
use crate::position::Position;
use crate::rules;
use crate::state::GameState;
use crate::types::Square;
use tracing::{debug, error, instrument, warn};

/// Creates the opening state: empty board, X to move, nothing decided.
#[instrument]
pub fn start() -> GameState {
    debug!("Starting new game");
    GameState::new()
}

/// Applies one move to `state` and returns the resulting state.
///
/// A finished game is returned unchanged whatever the move is.
///
/// # Errors
///
/// - [`MoveError::InvalidInput`] if the token is not a finite number.
/// - [`MoveError::InvalidPosition`] if it is not a number 1-9.
/// - [`MoveError::PositionTaken`] if the square is already marked.
pub fn play(state: &GameState, raw: impl Into<RawMove>) -> Result<GameState, MoveError> {
    apply(state, &raw.into())
}

/// Applies `moves` left to right, each against the result of the previous.
///
/// The first rejected move aborts the call and nothing after it is applied.
/// Moves that arrive after the game has ended are absorbed.
///
/// # Errors
///
/// The first [`MoveError`] raised by [`play`].
pub fn play_all<I>(state: &GameState, moves: I) -> Result<GameState, MoveError>
where
    I: IntoIterator,
    I::Item: Into<RawMove>,
{
    moves
        .into_iter()
        .try_fold(state.clone(), |current, raw| play(&current, raw))
}

#[instrument(skip(state), fields(player = %state.current_player(), moves = state.history().len()))]
fn apply(state: &GameState, raw: &RawMove) -> Result<GameState, MoveError> {
    if state.is_over() {
        debug!(outcome = ?state.outcome(), "Game already over; move ignored");
        return Ok(state.clone());
    }

    let position = MoveContract::pre(state, raw).inspect_err(|e| {
        warn!(error = %e, "Move rejected");
    })?;

    let next = advance(state, position);
    assert_postconditions(state, &next);

    debug!(
        %position,
        next_player = %next.current_player(),
        is_over = next.is_over(),
        winner = ?next.winner(),
        "Move applied"
    );
    Ok(next)
}

/// Marks `position` for the current player and evaluates the result.
fn advance(prev: &GameState, position: Position) -> GameState {
    let player = prev.current_player();

    let mut board = prev.board().clone();
    board.set(position, Square::Occupied(player));

    let available_positions: Vec<Position> = prev
        .available_positions()
        .iter()
        .copied()
        .filter(|p| *p != position)
        .collect();

    let mut history = prev.history().to_vec();
    history.push(Move::new(player, position));

    let has_win = rules::is_winning_move(&board, player);
    let is_board_full = available_positions.is_empty();
    let is_over = has_win || is_board_full;

    GameState {
        current_player: if is_over { player } else { player.opponent() },
        board,
        available_positions,
        is_over,
        is_draw: !has_win && is_board_full,
        winner: has_win.then_some(player),
        history,
    }
}

/// Checks the move contract's postconditions in debug builds.
fn assert_postconditions(before: &GameState, after: &GameState) {
    if !cfg!(debug_assertions) {
        return;
    }
    let result = MoveContract::post(before, after);
    if let Err(violations) = &result {
        for violation in violations {
            error!(%violation, "Move postcondition violated");
        }
    }
    debug_assert!(result.is_ok(), "Move postcondition failed: {result:?}");
}
