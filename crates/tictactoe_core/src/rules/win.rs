//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::instrument;

/// The 8 winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// True if `player` holds all three cells of `line`.
pub fn has_line_win(board: &Board, player: Player, line: &[Position; 3]) -> bool {
    line.iter().all(|pos| board.mark_at(*pos) == Some(player))
}

/// True if `player` holds any winning line.
///
/// After a move only the mover can have completed a line, so the engine
/// checks the mover alone.
#[instrument(level = "trace", skip(board))]
pub fn is_winning_move(board: &Board, player: Player) -> bool {
    WIN_LINES.iter().any(|line| has_line_win(board, player, line))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| is_winning_move(board, *player))
}
