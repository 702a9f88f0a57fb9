//! Application layer for the tic-tac-toe engine.
//!
//! A [`GameSession`] holds the current [`GameState`](tictactoe_core::GameState),
//! parses line [`Command`]s, drives the engine, and reports everything
//! through a [`Presenter`] as [`PresentationEvent`]s. Rendering is left to
//! whichever adapter implements the presenter.
//!
//! ```
//! use tictactoe_session::{GameSession, PresentationEvent, RecordingPresenter};
//! use tictactoe_core::{Outcome, Player};
//!
//! let mut session = GameSession::new(RecordingPresenter::new());
//! session.handle_all(["start", "move 1", "move 4", "move 2", "move 5", "move 3"]);
//!
//! let events = session.presenter().events();
//! assert_eq!(
//!     events.last(),
//!     Some(&PresentationEvent::GameOver(Outcome::Winner(Player::X)))
//! );
//! assert_eq!(session.exit_code(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod config;
mod ports;
mod session;

pub use command::Command;
pub use config::{ConfigError, SessionConfig};
pub use ports::{EXIT_SUCCESS, ExitReason, PresentationEvent, Presenter, RecordingPresenter};
pub use session::{GameSession, UNKNOWN_COMMAND_MESSAGE, game_over_message, move_error_message};
