//! Console front end: one line of input in, one message out.

use std::str::FromStr;

use hideseek_domain::Direction;

use crate::entities::HouseLoader;
use crate::error::GameError;
use crate::use_cases::{GameSession, SaveGames};

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Direction),
    Check,
    Teleport,
    /// Start over, in the named house if one is given.
    New(Option<String>),
    Save(String),
    Load(String),
    Delete(String),
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (verb, argument) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "check" if argument.is_empty() => Ok(Self::Check),
            "teleport" if argument.is_empty() => Ok(Self::Teleport),
            "new" | "restart" => Ok(Self::New(
                Some(argument.to_string()).filter(|name| !name.is_empty()),
            )),
            "save" => Ok(Self::Save(argument.to_string())),
            "load" => Ok(Self::Load(argument.to_string())),
            "delete" => Ok(Self::Delete(argument.to_string())),
            _ => line
                .parse::<Direction>()
                .map(Self::Go)
                .map_err(|_| GameError::validation("That's not a valid direction")),
        }
    }
}

/// Runs commands against the live session.
pub struct Console {
    session: GameSession,
    houses: HouseLoader,
    games: SaveGames,
}

impl Console {
    pub fn new(session: GameSession, houses: HouseLoader, games: SaveGames) -> Self {
        Self {
            session,
            houses,
            games,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn status(&self) -> String {
        self.session.status()
    }

    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    /// Parse and run one line. Errors come back as messages; the game goes on.
    ///
    /// A win is announced and a fresh game starts in the same house.
    pub fn handle_line(&mut self, line: &str) -> String {
        let result = line
            .parse::<Command>()
            .and_then(|command| self.execute(command));
        let mut message = match result {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!(error = %err, input = line, "Command rejected");
                err.to_string()
            }
        };

        if self.session.is_game_over() {
            message.push_str(&format!(
                "\n\nYou won the game in {} moves!",
                self.session.move_number()
            ));
            match self.session.restart(None, None) {
                Ok(()) => message.push_str("\nLet's play again. Your opponents are hiding."),
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to start a new game");
                    message.push_str(&format!("\n{}", err));
                }
            }
        }
        message
    }

    pub fn execute(&mut self, command: Command) -> Result<String, GameError> {
        match command {
            Command::Go(direction) => Ok(self.session.go(direction)?.to_string()),
            Command::Check => Ok(self.session.check_current_location()?.to_string()),
            Command::Teleport => Ok(self.session.teleport()?.to_string()),
            Command::New(house) => {
                let house = house.map(|name| self.houses.load(&name)).transpose()?;
                self.session.restart(house, None)?;
                Ok(format!(
                    "Starting a new game in {}",
                    self.session.house().name()
                ))
            }
            Command::Save(name) => {
                self.games.save(&self.session, &name)?;
                Ok(format!("Saved current game to {}", name))
            }
            Command::Load(name) => {
                self.session = self.games.load(&name)?;
                Ok(format!("Loaded game from {}", name))
            }
            Command::Delete(name) => {
                self.games.delete(&name)?;
                Ok(format!("Deleted saved game {}", name))
            }
        }
    }
}
