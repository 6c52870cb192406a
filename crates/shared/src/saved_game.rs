//! Saved game document
//!
//! An ephemeral transfer record: written on save, read on load, and
//! discarded once a live session has been rebuilt from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flattened snapshot of a game in progress.
///
/// Nothing here is validated on deserialization beyond JSON shape; every
/// name must be re-resolved against the house named by `house_source_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGameDocument {
    /// Name of the house layout the game was played in
    pub house_source_name: String,
    /// Name of the location the player is standing in
    pub player_location: String,
    /// Move counter; a signed integer so out-of-range values reach validation
    pub move_number: i64,
    /// Every opponent and the hiding location it was last sent to, including
    /// opponents that have already been found
    pub opponents_and_hiding_locations: BTreeMap<String, String>,
    /// Names of opponents found so far, in the order they were found
    pub found_opponents: Vec<String>,
}

impl SavedGameDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    fn sample() -> SavedGameDocument {
        SavedGameDocument {
            house_source_name: "DefaultHouse".to_string(),
            player_location: "Garage".to_string(),
            move_number: 7,
            opponents_and_hiding_locations: BTreeMap::from([
                ("Bob".to_string(), "Garage".to_string()),
                ("Joe".to_string(), "Attic".to_string()),
            ]),
            found_opponents: vec!["Bob".to_string()],
        }
    }

    #[test]
    fn uses_camel_case_field_names() {
        let json = sample().to_json().expect("serialize");
        assert!(json.contains("\"houseSourceName\""));
        assert!(json.contains("\"playerLocation\""));
        assert!(json.contains("\"moveNumber\""));
        assert!(json.contains("\"opponentsAndHidingLocations\""));
        assert!(json.contains("\"foundOpponents\""));
    }

    #[test]
    fn reads_what_it_writes() {
        let doc = sample();
        let decoded = SavedGameDocument::from_json(&doc.to_json().expect("serialize"))
            .expect("deserialize");
        assert_eq!(decoded, doc);
    }

    #[test]
    fn negative_move_number_parses() {
        let json = r#"{
            "houseSourceName": "DefaultHouse",
            "playerLocation": "Entry",
            "moveNumber": -3,
            "opponentsAndHidingLocations": {},
            "foundOpponents": []
        }"#;
        let doc = SavedGameDocument::from_json(json).expect("deserialize");
        assert_eq!(doc.move_number, -3);
    }

    #[test]
    fn missing_field_is_an_error() {
        let json = r#"{ "houseSourceName": "DefaultHouse" }"#;
        assert!(SavedGameDocument::from_json(json).is_err());
    }
}
