//! Application state and composition.

use std::sync::Arc;

use crate::api::Console;
use crate::entities::{HouseLoader, RandomWalker};
use crate::error::GameError;
use crate::infrastructure::{
    file_storage::FileStorage,
    ports::{RandomPort, StoragePort},
    random::SystemRandom,
    settings::GameSettings,
};
use crate::use_cases::{GameSession, SaveGames};

/// Main application state.
///
/// Holds the settings and the services every game is built from.
pub struct App {
    pub settings: GameSettings,
    pub houses: HouseLoader,
    pub games: SaveGames,
    pub walker: RandomWalker,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        settings: GameSettings,
        storage: Arc<dyn StoragePort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let walker = RandomWalker::new(random);
        let houses = HouseLoader::new(storage.clone());
        let games = SaveGames::new(storage, houses.clone(), walker.clone());

        Self {
            settings,
            houses,
            games,
            walker,
        }
    }

    /// Wire the app to the data directory and real randomness.
    pub fn from_settings(settings: GameSettings) -> Self {
        let storage: Arc<dyn StoragePort> = Arc::new(FileStorage::new(settings.data_dir.clone()));
        let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());
        Self::new(settings, storage, random)
    }

    /// A new game in the configured house with the configured opponents.
    pub fn new_session(&self) -> Result<GameSession, GameError> {
        let house = self.houses.load(&self.settings.house)?;
        GameSession::start(house, self.settings.opponents.clone(), self.walker.clone())
    }

    pub fn console(&self) -> Result<Console, GameError> {
        Ok(Console::new(
            self.new_session()?,
            self.houses.clone(),
            self.games.clone(),
        ))
    }
}
