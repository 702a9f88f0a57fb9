//! Pure tic-tac-toe game engine.
//!
//! A game is a sequence of immutable [`GameState`] values. [`start`] builds
//! the opening state and [`play`] derives the next one, rejecting bad moves
//! with a typed [`MoveError`]:
//!
//! ```
//! use tictactoe_core::{MoveError, Player, play_all, start};
//!
//! let won = play_all(&start(), [1, 4, 2, 5, 3]).unwrap();
//! assert_eq!(won.winner(), Some(Player::X));
//!
//! // Finished games absorb further moves.
//! assert_eq!(won.play(6).unwrap(), won);
//!
//! assert_eq!(start().play("abc"), Err(MoveError::InvalidInput));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
mod error;
mod input;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::Move;
pub use engine::{play, play_all, start};
pub use error::{ERROR_INVALID_INPUT, ERROR_INVALID_POSITION, ERROR_POSITION_TAKEN, MoveError};
pub use input::RawMove;
pub use phases::Outcome;
pub use position::{MAX_POSITION, MIN_POSITION, Position};
pub use state::GameState;
pub use types::{Board, Player, Square};
