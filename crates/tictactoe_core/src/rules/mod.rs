//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! state transitions so contracts and invariants can reuse them.

pub mod win;

pub use win::{WIN_LINES, check_winner, has_line_win, is_winning_move};
