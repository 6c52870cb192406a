//! House loading and layout conversion.
//!
//! A house is resolved by source name: a stored `<name>.house.json` layout
//! wins, otherwise the built-in default house answers to its own name.

use std::sync::Arc;

use hideseek_domain::{
    default_house, DocumentName, DomainError, HidingPlace, House, LocationName,
    DEFAULT_HOUSE_SOURCE,
};
use hideseek_shared::{HouseLayoutDocument, LocationRecord};

use crate::error::GameError;
use crate::infrastructure::ports::StoragePort;

/// Storage key for a house layout.
pub fn house_key(name: &DocumentName) -> String {
    format!("{}.house.json", name)
}

/// Flatten a house into its layout document. Both sides of every
/// connection are listed.
pub fn house_to_document(house: &House) -> HouseLayoutDocument {
    HouseLayoutDocument {
        name: house.name().to_string(),
        entry: house.location(house.entry()).name().to_string(),
        locations: house
            .locations()
            .iter()
            .map(|location| LocationRecord {
                name: location.name().to_string(),
                hiding_place: location.hiding_place().map(|p| p.to_string()),
                exits: location
                    .exits()
                    .iter()
                    .map(|(&direction, &to)| (direction, house.location(to).name().to_string()))
                    .collect(),
            })
            .collect(),
    }
}

/// Build a house from its layout document.
pub fn house_from_document(
    source_name: &str,
    document: &HouseLayoutDocument,
) -> Result<House, DomainError> {
    let mut builder = House::builder(document.name.clone(), source_name);

    for record in &document.locations {
        let name = LocationName::new(record.name.as_str())?;
        match &record.hiding_place {
            Some(place) => builder.add_hiding_location(name, HidingPlace::new(place.as_str())?)?,
            None => builder.add_location(name)?,
        };
    }

    for record in &document.locations {
        let from = builder
            .find(&record.name)
            .ok_or_else(|| DomainError::not_found("Location", record.name.as_str()))?;
        for (&direction, neighbor) in &record.exits {
            let to = builder
                .find(neighbor)
                .ok_or_else(|| DomainError::not_found("Location", neighbor.as_str()))?;
            builder.connect(from, direction, to)?;
        }
    }

    let entry = builder
        .find(&document.entry)
        .ok_or_else(|| DomainError::not_found("Entry location", document.entry.as_str()))?;
    builder.build(entry)
}

/// Resolves house source names to live houses.
#[derive(Clone)]
pub struct HouseLoader {
    storage: Arc<dyn StoragePort>,
}

impl HouseLoader {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// Load the house called `source_name`.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is not a valid document name
    /// - `NotFound` if no layout is stored and it is not the default house
    /// - `CorruptData` if the stored layout cannot be parsed or built
    pub fn load(&self, source_name: &str) -> Result<House, GameError> {
        let name = DocumentName::new(source_name)?;
        let key = house_key(&name);

        if self.storage.exists(&key) {
            let text = self.storage.read(&key)?;
            let document = HouseLayoutDocument::from_json(&text)
                .map_err(|e| GameError::corrupt(name.as_str(), e))?;
            let house = house_from_document(name.as_str(), &document)
                .map_err(|e| GameError::corrupt(name.as_str(), e))?;
            tracing::info!(
                house = %name,
                locations = house.locations().len(),
                "Loaded house layout"
            );
            return Ok(house);
        }

        if name.as_str() == DEFAULT_HOUSE_SOURCE {
            return Ok(default_house()?);
        }

        Err(GameError::not_found("House", name.as_str()))
    }

    /// Store a house layout under the house's source name.
    pub fn save(&self, house: &House) -> Result<(), GameError> {
        let name = DocumentName::new(house.source_name())?;
        let key = house_key(&name);
        if self.storage.exists(&key) {
            return Err(GameError::conflict(format!(
                "The house \"{}\" already exists",
                name
            )));
        }
        let text = house_to_document(house)
            .to_json()
            .map_err(|e| GameError::corrupt(name.as_str(), e))?;
        self.storage.write(&key, &text)?;
        tracing::info!(house = %name, "Saved house layout");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockStoragePort;
    use crate::test_fixtures::{MemoryStorage, TINY_HOUSE};
    use hideseek_domain::Direction;

    fn loader_with(storage: MemoryStorage) -> HouseLoader {
        HouseLoader::new(Arc::new(storage))
    }

    mod layout {
        use super::*;

        #[test]
        fn round_trip_preserves_nodes_and_exits() {
            let house = default_house().unwrap();
            let rebuilt =
                house_from_document(house.source_name(), &house_to_document(&house)).unwrap();

            assert_eq!(rebuilt.name(), house.name());
            assert_eq!(rebuilt.locations().len(), house.locations().len());
            for location in house.locations() {
                let other = rebuilt.find_by_name(location.name().as_str()).unwrap();
                assert_eq!(other.hiding_place(), location.hiding_place());
                assert_eq!(
                    rebuilt.exit_descriptions(other.id()),
                    house.exit_descriptions(location.id())
                );
            }
        }

        #[test]
        fn one_sided_exits_get_reciprocals() {
            let document = HouseLayoutDocument::from_json(TINY_HOUSE).unwrap();
            let house = house_from_document("Tiny", &document).unwrap();
            let loft = house.find_by_name("Loft").unwrap();
            let den = house.find_by_name("Den").unwrap();
            assert_eq!(loft.exit(Direction::Down), Some(den.id()));
        }

        #[test]
        fn unknown_neighbor_rejected() {
            let mut document = HouseLayoutDocument::from_json(TINY_HOUSE).unwrap();
            document.locations[0]
                .exits
                .insert(Direction::North, "Cellar".to_string());
            let err = house_from_document("Tiny", &document).unwrap_err();
            assert!(err.to_string().contains("Cellar"));
        }

        #[test]
        fn contradicting_exit_rejected() {
            let mut document = HouseLayoutDocument::from_json(TINY_HOUSE).unwrap();
            // Porch already leads In to the Den
            document.locations[2]
                .exits
                .insert(Direction::Out, "Porch".to_string());
            assert!(house_from_document("Tiny", &document).is_err());
        }

        #[test]
        fn missing_entry_rejected() {
            let mut document = HouseLayoutDocument::from_json(TINY_HOUSE).unwrap();
            document.entry = "Garden".to_string();
            let err = house_from_document("Tiny", &document).unwrap_err();
            assert!(err.is_not_found());
        }
    }

    mod load {
        use super::*;

        #[test]
        fn stored_layout_is_loaded() {
            let storage = MemoryStorage::default().with("Tiny.house.json", TINY_HOUSE);
            let house = loader_with(storage).load("Tiny").unwrap();
            assert_eq!(house.source_name(), "Tiny");
            assert_eq!(house.location(house.entry()).name().as_str(), "Porch");
        }

        #[test]
        fn default_house_needs_no_file() {
            let house = loader_with(MemoryStorage::default())
                .load(DEFAULT_HOUSE_SOURCE)
                .unwrap();
            assert_eq!(house.source_name(), DEFAULT_HOUSE_SOURCE);
        }

        #[test]
        fn unknown_house_is_not_found() {
            let err = loader_with(MemoryStorage::default())
                .load("Mansion")
                .unwrap_err();
            assert_eq!(err, GameError::not_found("House", "Mansion"));
        }

        #[test]
        fn malformed_layout_is_corrupt_data() {
            let storage = MemoryStorage::default().with("Tiny.house.json", "{ not json");
            let err = loader_with(storage).load("Tiny").unwrap_err();
            match err {
                GameError::CorruptData { document, .. } => assert_eq!(document, "Tiny"),
                other => panic!("Expected CorruptData, got {other:?}"),
            }
        }

        #[test]
        fn invalid_name_is_validation_error() {
            let mut storage = MockStoragePort::new();
            storage.expect_exists().never();
            let err = HouseLoader::new(Arc::new(storage)).load("a/b").unwrap_err();
            assert!(matches!(err, GameError::Validation(_)));
        }
    }

    mod save {
        use super::*;

        #[test]
        fn save_then_load_round_trips() {
            let storage = Arc::new(MemoryStorage::default());
            let loader = HouseLoader::new(storage.clone());
            let document = HouseLayoutDocument::from_json(TINY_HOUSE).unwrap();
            let house = house_from_document("Tiny", &document).unwrap();

            loader.save(&house).unwrap();
            assert!(storage.exists("Tiny.house.json"));
            let loaded = loader.load("Tiny").unwrap();
            assert_eq!(loaded.locations().len(), 3);
        }

        #[test]
        fn save_refuses_to_overwrite() {
            let mut storage = MockStoragePort::new();
            storage
                .expect_exists()
                .withf(|name| name == "DefaultHouse.house.json")
                .return_const(true);
            storage.expect_write().never();

            let err = HouseLoader::new(Arc::new(storage))
                .save(&default_house().unwrap())
                .unwrap_err();
            assert!(matches!(err, GameError::Conflict(_)));
        }
    }
}
