//! Presentation port: what a session tells the outside world.
//!
//! Adapters (a text renderer, a DOM view, a test driver) implement
//! [`Presenter`] and receive one [`PresentationEvent`] at a time. An adapter
//! that has nothing to show for an event simply ignores it.

use tictactoe_core::{GameState, MoveError, Outcome, Player};

/// Exit code for a run with no rejected moves.
pub const EXIT_SUCCESS: u8 = 0;

/// Why a move was rejected, in the form process adapters turn into exit codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
pub enum ExitReason {
    /// The move token was not a number.
    InvalidInput,
    /// The move was a number outside 1-9.
    OutOfRange,
    /// The square was already marked.
    PositionTaken,
}

impl ExitReason {
    /// Process exit code for this reason.
    pub fn exit_code(self) -> u8 {
        match self {
            ExitReason::InvalidInput => 2,
            ExitReason::OutOfRange => 3,
            ExitReason::PositionTaken => 4,
        }
    }
}

impl From<&MoveError> for ExitReason {
    fn from(err: &MoveError) -> Self {
        match err {
            MoveError::InvalidInput => ExitReason::InvalidInput,
            MoveError::InvalidPosition => ExitReason::OutOfRange,
            MoveError::PositionTaken { .. } => ExitReason::PositionTaken,
        }
    }
}

/// Something a session wants shown.
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationEvent {
    /// A new current state.
    State(GameState),
    /// The game just ended.
    GameOver(Outcome),
    /// A message describing a rejected command or move.
    Error(String),
    /// The user asked for help.
    Help,
    /// The named player should move next.
    Prompt(Player),
    /// The user asked to quit.
    Quit,
    /// A move was rejected for this reason.
    Exit(ExitReason),
}

/// Receives presentation events from a session.
pub trait Presenter {
    /// Presents one event.
    fn present(&mut self, event: PresentationEvent);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, event: PresentationEvent) {
        (**self).present(event);
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn present(&mut self, event: PresentationEvent) {
        (**self).present(event);
    }
}

/// Presenter that keeps every event in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingPresenter {
    events: Vec<PresentationEvent>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events presented so far, oldest first.
    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    /// Removes and returns all recorded events.
    pub fn take(&mut self) -> Vec<PresentationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Error messages presented so far.
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PresentationEvent::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The most recently presented state, if any.
    pub fn last_state(&self) -> Option<&GameState> {
        self.events.iter().rev().find_map(|event| match event {
            PresentationEvent::State(state) => Some(state),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, event: PresentationEvent) {
        self.events.push(event);
    }
}
