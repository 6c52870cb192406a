//! House layout document
//!
//! The structured record a `House` is built from. Exits may be listed on
//! one side only or on both; the engine fills in reciprocals.

use std::collections::BTreeMap;

use hideseek_domain::Direction;
use serde::{Deserialize, Serialize};

/// A complete house layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseLayoutDocument {
    /// Display name of the house
    pub name: String,
    /// Name of the location every game starts in
    pub entry: String,
    /// Every location in the house
    pub locations: Vec<LocationRecord>,
}

/// One location and its exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub name: String,
    /// Present only for locations someone can hide in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiding_place: Option<String>,
    /// Direction -> neighbor name
    #[serde(default)]
    pub exits: BTreeMap<Direction, String>,
}

impl HouseLayoutDocument {
    /// Parse a layout from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Render the layout as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
