//! Shared test helpers: an in-memory storage double and ready-made sessions.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{session_hiding, MemoryStorage};
//!
//! #[test]
//! fn bob_is_in_the_garage() {
//!     let session = session_hiding(&[("Bob", "Garage")]);
//!     // ... test logic
//! }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use hideseek_domain::{default_house, Opponent};

use crate::entities::RandomWalker;
use crate::infrastructure::ports::{StorageError, StoragePort};
use crate::infrastructure::random::LowestRandom;
use crate::use_cases::session::GameSession;

// =============================================================================
// Storage
// =============================================================================

/// Storage backed by a map, for tests that need real save/load behavior.
#[derive(Default)]
pub struct MemoryStorage {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Seed a document.
    pub fn with(self, name: &str, text: &str) -> Self {
        self.documents
            .lock()
            .unwrap()
            .insert(name.to_string(), text.to_string());
        self
    }

    /// Raw text of a stored document.
    pub fn document(&self, name: &str) -> Option<String> {
        self.documents.lock().unwrap().get(name).cloned()
    }
}

impl StoragePort for MemoryStorage {
    fn exists(&self, name: &str) -> bool {
        self.documents.lock().unwrap().contains_key(name)
    }

    fn read(&self, name: &str) -> Result<String, StorageError> {
        self.document(name)
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn write(&self, name: &str, text: &str) -> Result<(), StorageError> {
        self.documents
            .lock()
            .unwrap()
            .insert(name.to_string(), text.to_string());
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), StorageError> {
        self.documents
            .lock()
            .unwrap()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }
}

// =============================================================================
// Houses
// =============================================================================

/// A three-room layout: Porch, then a Den with the Loft above it.
pub const TINY_HOUSE: &str = r#"{
    "name": "tiny house",
    "entry": "Porch",
    "locations": [
        { "name": "Porch", "exits": { "In": "Den" } },
        { "name": "Den", "hidingPlace": "behind the curtains", "exits": { "Out": "Porch", "Up": "Loft" } },
        { "name": "Loft", "hidingPlace": "under a blanket" }
    ]
}"#;

// =============================================================================
// Sessions
// =============================================================================

/// A walker that always takes the lowest choice: ten steps, first exit.
pub fn lowest_walker() -> RandomWalker {
    RandomWalker::new(Arc::new(LowestRandom))
}

pub fn opponents(names: &[&str]) -> Vec<Opponent> {
    names
        .iter()
        .map(|name| Opponent::named(*name).unwrap())
        .collect()
}

/// A fresh game in the default house with each opponent hidden at the named
/// location.
pub fn session_hiding(hiding: &[(&str, &str)]) -> GameSession {
    let names: Vec<&str> = hiding.iter().map(|(opponent, _)| *opponent).collect();
    let places: Vec<&str> = hiding.iter().map(|(_, place)| *place).collect();

    let mut session =
        GameSession::start(default_house().unwrap(), opponents(&names), lowest_walker()).unwrap();
    session.restart(None, Some(places.as_slice())).unwrap();
    session
}
