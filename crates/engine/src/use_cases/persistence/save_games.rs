//! Saved game storage.

use std::sync::Arc;

use hideseek_domain::DocumentName;
use hideseek_shared::SavedGameDocument;

use super::snapshot::{restore_session, to_document};
use crate::entities::{HouseLoader, RandomWalker};
use crate::error::GameError;
use crate::infrastructure::ports::StoragePort;
use crate::use_cases::session::GameSession;

/// Storage key for a saved game.
pub fn game_key(name: &DocumentName) -> String {
    format!("{}.game.json", name)
}

/// Save, load, and delete games by name.
#[derive(Clone)]
pub struct SaveGames {
    storage: Arc<dyn StoragePort>,
    houses: HouseLoader,
    walker: RandomWalker,
}

impl SaveGames {
    pub fn new(storage: Arc<dyn StoragePort>, houses: HouseLoader, walker: RandomWalker) -> Self {
        Self {
            storage,
            houses,
            walker,
        }
    }

    /// Write `session` under `name`. Never overwrites an existing save.
    pub fn save(&self, session: &GameSession, name: &str) -> Result<(), GameError> {
        let name = DocumentName::new(name)?;
        let key = game_key(&name);
        if self.storage.exists(&key) {
            return Err(GameError::conflict(format!(
                "Cannot save game, file already exists: {}",
                name
            )));
        }

        let text = to_document(session)
            .to_json()
            .map_err(|e| GameError::corrupt(name.as_str(), e))?;
        self.storage.write(&key, &text)?;
        tracing::info!(game = %name, move_number = session.move_number(), "Saved game");
        Ok(())
    }

    /// Read the game saved under `name` and rebuild a live session from it.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is not a valid document name
    /// - `NotFound` if no such save exists, or it names a missing house or
    ///   location
    /// - `CorruptData` if the save is not a readable document
    pub fn load(&self, name: &str) -> Result<GameSession, GameError> {
        let name = DocumentName::new(name)?;
        let key = game_key(&name);
        if !self.storage.exists(&key) {
            return Err(GameError::not_found("Saved game", name.as_str()));
        }

        let text = self.storage.read(&key)?;
        let document = SavedGameDocument::from_json(&text)
            .map_err(|e| GameError::corrupt(name.as_str(), e))?;
        let session = restore_session(&document, &self.houses, self.walker.clone())?;
        tracing::info!(game = %name, move_number = session.move_number(), "Loaded game");
        Ok(session)
    }

    /// Remove the game saved under `name`.
    pub fn delete(&self, name: &str) -> Result<(), GameError> {
        let name = DocumentName::new(name)?;
        let key = game_key(&name);
        if !self.storage.exists(&key) {
            return Err(GameError::not_found("Saved game", name.as_str()));
        }
        self.storage.delete(&key)?;
        tracing::info!(game = %name, "Deleted saved game");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockStoragePort, StorageError};
    use crate::test_fixtures::{lowest_walker, session_hiding, MemoryStorage};
    use hideseek_domain::Direction;

    fn save_games(storage: Arc<dyn StoragePort>) -> SaveGames {
        SaveGames::new(
            storage.clone(),
            HouseLoader::new(storage),
            lowest_walker(),
        )
    }

    mod save {
        use super::*;

        #[test]
        fn writes_json_under_the_game_key() {
            let storage = Arc::new(MemoryStorage::default());
            let session = session_hiding(&[("Bob", "Garage")]);

            save_games(storage.clone()).save(&session, "first").unwrap();

            let text = storage.document("first.game.json").unwrap();
            let document = SavedGameDocument::from_json(&text).unwrap();
            assert_eq!(document.player_location, "Entry");
            assert_eq!(document.house_source_name, "DefaultHouse");
        }

        #[test]
        fn existing_save_is_a_conflict() {
            let mut storage = MockStoragePort::new();
            storage
                .expect_exists()
                .withf(|key| key == "first.game.json")
                .return_const(true);
            storage.expect_write().never();

            let err = save_games(Arc::new(storage))
                .save(&session_hiding(&[("Bob", "Garage")]), "first")
                .unwrap_err();
            assert!(matches!(err, GameError::Conflict(_)));
        }

        #[test]
        fn name_with_a_space_is_rejected() {
            let mut storage = MockStoragePort::new();
            storage.expect_exists().never();
            storage.expect_write().never();

            let err = save_games(Arc::new(storage))
                .save(&session_hiding(&[("Bob", "Garage")]), "my game")
                .unwrap_err();
            assert!(matches!(err, GameError::Validation(_)));
        }

        #[test]
        fn storage_failure_is_reported() {
            let mut storage = MockStoragePort::new();
            storage.expect_exists().return_const(false);
            storage
                .expect_write()
                .returning(|_, _| Err(StorageError::io("write", "disk full")));

            let err = save_games(Arc::new(storage))
                .save(&session_hiding(&[("Bob", "Garage")]), "first")
                .unwrap_err();
            assert!(matches!(err, GameError::Storage { .. }));
        }
    }

    mod load {
        use super::*;

        #[test]
        fn save_then_load() {
            let storage = Arc::new(MemoryStorage::default());
            let games = save_games(storage);
            let mut session = session_hiding(&[("Bob", "Garage"), ("Joe", "Attic")]);
            session.go(Direction::Out).unwrap();
            session.check_current_location().unwrap();
            games.save(&session, "midgame").unwrap();

            let loaded = games.load("midgame").unwrap();
            assert_eq!(loaded.current_location().name().as_str(), "Garage");
            assert_eq!(loaded.move_number(), 3);
            assert_eq!(loaded.found(), session.found());
        }

        #[test]
        fn missing_save_is_not_found() {
            let err = save_games(Arc::new(MemoryStorage::default()))
                .load("nothing")
                .unwrap_err();
            assert_eq!(err, GameError::not_found("Saved game", "nothing"));
        }

        #[test]
        fn unreadable_save_is_corrupt_data() {
            let storage = MemoryStorage::default().with("broken.game.json", "[1, 2");
            let err = save_games(Arc::new(storage)).load("broken").unwrap_err();
            assert!(err.to_string().starts_with("Unable to read broken"));
        }

        #[test]
        fn missing_field_is_corrupt_data() {
            let storage = MemoryStorage::default().with(
                "partial.game.json",
                r#"{ "houseSourceName": "DefaultHouse", "playerLocation": "Entry" }"#,
            );
            let err = save_games(Arc::new(storage)).load("partial").unwrap_err();
            assert!(matches!(err, GameError::CorruptData { .. }));
        }

        #[test]
        fn save_in_missing_house_is_not_found() {
            let storage = MemoryStorage::default().with(
                "lost.game.json",
                r#"{
                    "houseSourceName": "Mansion",
                    "playerLocation": "Entry",
                    "moveNumber": 1,
                    "opponentsAndHidingLocations": { "Bob": "Garage" },
                    "foundOpponents": []
                }"#,
            );
            let err = save_games(Arc::new(storage)).load("lost").unwrap_err();
            assert_eq!(err, GameError::not_found("House", "Mansion"));
        }
    }

    mod delete {
        use super::*;

        #[test]
        fn removes_the_save() {
            let storage = Arc::new(MemoryStorage::default());
            let games = save_games(storage.clone());
            games
                .save(&session_hiding(&[("Bob", "Garage")]), "old")
                .unwrap();

            games.delete("old").unwrap();
            assert!(!storage.exists("old.game.json"));
        }

        #[test]
        fn missing_save_is_not_found() {
            let mut storage = MockStoragePort::new();
            storage.expect_exists().return_const(false);
            storage.expect_delete().never();

            let err = save_games(Arc::new(storage)).delete("old").unwrap_err();
            assert!(err.is_not_found());
        }
    }
}
