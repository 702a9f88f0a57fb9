//! A game session: the current state plus the presenter it reports to.

use crate::command::Command;
use crate::config::SessionConfig;
use crate::ports::{EXIT_SUCCESS, ExitReason, PresentationEvent, Presenter};
use tictactoe_core::{GameState, MoveError, RawMove, start};
use tracing::{debug, info, instrument, warn};

/// Reply to any command the session does not recognize.
pub const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown command";

/// Turns commands into engine calls and engine results into presentation
/// events.
///
/// The session owns "the current game". Moves before the first `start` are
/// ignored; moves after the game ends are reported as errors without
/// reaching the engine.
#[derive(Debug)]
pub struct GameSession<P> {
    current: Option<GameState>,
    presenter: P,
    config: SessionConfig,
    worst_exit: Option<ExitReason>,
}

impl<P: Presenter> GameSession<P> {
    /// Creates a session with the default configuration.
    pub fn new(presenter: P) -> Self {
        Self::with_config(presenter, SessionConfig::default())
    }

    /// Creates a session with the given configuration.
    pub fn with_config(presenter: P, config: SessionConfig) -> Self {
        Self {
            current: None,
            presenter,
            config,
            worst_exit: None,
        }
    }

    /// The current game, if one has been started.
    pub fn current(&self) -> Option<&GameState> {
        self.current.as_ref()
    }

    /// The configuration in use.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Consumes the session and returns its presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Highest exit code of any move rejected so far, or [`EXIT_SUCCESS`].
    pub fn exit_code(&self) -> u8 {
        self.worst_exit.map_or(EXIT_SUCCESS, ExitReason::exit_code)
    }

    /// Parses and executes one line of input.
    pub fn handle(&mut self, line: &str) {
        self.execute(Command::parse(line));
    }

    /// Handles each line in order.
    pub fn handle_all<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for line in lines {
            self.handle(line);
        }
    }

    /// Executes a parsed command.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Start => self.start_game(),
            Command::Help => self.presenter.present(PresentationEvent::Help),
            Command::Move(raw) => self.play_move(raw),
            Command::Quit => {
                info!("Quit requested");
                self.presenter.present(PresentationEvent::Quit);
            }
            Command::Noop => {}
            Command::Unknown => self
                .presenter
                .present(PresentationEvent::Error(UNKNOWN_COMMAND_MESSAGE.to_string())),
        }
    }

    fn start_game(&mut self) {
        let state = start();
        let to_move = state.current_player();
        info!("New game started");
        if *self.config.verbose() {
            self.presenter.present(PresentationEvent::State(state.clone()));
        }
        if *self.config.prompt_next_player() {
            self.presenter.present(PresentationEvent::Prompt(to_move));
        }
        self.current = Some(state);
    }

    fn play_move(&mut self, raw: RawMove) {
        let Some(current) = &self.current else {
            debug!("Move before start ignored");
            return;
        };

        if current.is_over() {
            let message = game_over_message(current);
            self.presenter.present(PresentationEvent::Error(message));
            return;
        }

        match current.play(raw) {
            Ok(next) => self.accept(next),
            Err(err) => self.reject(&err),
        }
    }

    fn accept(&mut self, next: GameState) {
        if *self.config.verbose() {
            self.presenter.present(PresentationEvent::State(next.clone()));
        }
        match next.outcome() {
            Some(outcome) => {
                info!(%outcome, "Game over");
                self.presenter.present(PresentationEvent::GameOver(outcome));
            }
            None if *self.config.prompt_next_player() => {
                self.presenter
                    .present(PresentationEvent::Prompt(next.current_player()));
            }
            None => {}
        }
        self.current = Some(next);
    }

    fn reject(&mut self, err: &MoveError) {
        let reason = ExitReason::from(err);
        warn!(%reason, error = %err, "Move rejected");
        self.worst_exit = self.worst_exit.max(Some(reason));
        self.presenter.present(PresentationEvent::Exit(reason));
        self.presenter
            .present(PresentationEvent::Error(move_error_message(err)));
    }
}

/// User-facing text for a rejected move.
pub fn move_error_message(err: &MoveError) -> String {
    match err {
        MoveError::PositionTaken { position } => {
            format!("Position already taken at {position}")
        }
        MoveError::InvalidInput | MoveError::InvalidPosition => err.to_string(),
    }
}

/// User-facing text for a move attempted after the game ended.
pub fn game_over_message(state: &GameState) -> String {
    match (state.winner(), state.is_draw()) {
        (Some(winner), _) => format!("Game is over. Player {winner} won!"),
        (None, true) => "Game is over. It's a draw!".to_string(),
        (None, false) => "Game is over.".to_string(),
    }
}
