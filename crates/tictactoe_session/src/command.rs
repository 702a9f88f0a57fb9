//! Line commands accepted by a game session.

use std::str::FromStr;
use tictactoe_core::RawMove;
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Keyword {
    Start,
    Help,
    Move,
    Quit,
}

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Begin a new game.
    Start,
    /// Show help.
    Help,
    /// Play the given token. The engine validates it.
    Move(RawMove),
    /// Leave the session.
    Quit,
    /// Blank line.
    Noop,
    /// Anything else.
    Unknown,
}

impl Command {
    /// Parses one line.
    ///
    /// Keywords are case-insensitive. `move` takes the next
    /// whitespace-separated word as its token and ignores the rest; the
    /// other keywords must stand alone.
    #[instrument(level = "trace")]
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Command::Noop;
        };
        let Ok(keyword) = Keyword::from_str(first) else {
            return Command::Unknown;
        };
        let token = words.next();

        match (keyword, token) {
            (Keyword::Start, None) => Command::Start,
            (Keyword::Help, None) => Command::Help,
            (Keyword::Quit, None) => Command::Quit,
            (Keyword::Move, Some(token)) => Command::Move(RawMove::from(token)),
            _ => Command::Unknown,
        }
    }
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Ok(Command::parse(line))
    }
}
