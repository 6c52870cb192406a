//! Game settings loaded from the environment.
//!
//! | Variable             | Default                  |
//! |----------------------|--------------------------|
//! | `HIDESEEK_DATA_DIR`  | `.`                      |
//! | `HIDESEEK_HOUSE`     | `DefaultHouse`           |
//! | `HIDESEEK_OPPONENTS` | `Joe,Bob,Ana,Owen,Jimmy` |

use std::path::PathBuf;

use hideseek_domain::{DocumentName, Opponent, DEFAULT_HOUSE_SOURCE};

use crate::error::GameError;
use crate::use_cases::session::ensure_unique;

const DEFAULT_OPPONENTS: [&str; 5] = ["Joe", "Bob", "Ana", "Owen", "Jimmy"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    /// Directory holding saved games and house layouts
    pub data_dir: PathBuf,
    /// House source name new games are played in
    pub house: String,
    /// Opponents hidden in every new game, in this order
    pub opponents: Vec<Opponent>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            house: DEFAULT_HOUSE_SOURCE.to_string(),
            opponents: DEFAULT_OPPONENTS
                .iter()
                .filter_map(|name| Opponent::named(*name).ok())
                .collect(),
        }
    }
}

impl GameSettings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
        let mut settings = Self::default();

        if let Some(dir) = non_empty(lookup("HIDESEEK_DATA_DIR")) {
            settings.data_dir = PathBuf::from(dir);
        }
        if let Some(house) = non_empty(lookup("HIDESEEK_HOUSE")) {
            settings.house = DocumentName::new(house)?.into();
        }
        if let Some(list) = non_empty(lookup("HIDESEEK_OPPONENTS")) {
            settings.opponents = parse_opponents(&list)?;
        }

        Ok(settings)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse a comma-separated opponent list. Names must be non-empty and unique.
pub fn parse_opponents(list: &str) -> Result<Vec<Opponent>, GameError> {
    let opponents = list
        .split(',')
        .map(Opponent::named)
        .collect::<Result<Vec<_>, _>>()?;
    ensure_unique(&opponents)?;
    Ok(opponents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let settings = GameSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, GameSettings::default());
        assert_eq!(settings.house, "DefaultHouse");
        let names: Vec<&str> = settings.opponents.iter().map(|o| o.name().as_str()).collect();
        assert_eq!(names, vec!["Joe", "Bob", "Ana", "Owen", "Jimmy"]);
    }

    #[test]
    fn reads_overrides() {
        let settings = GameSettings::from_lookup(lookup(&[
            ("HIDESEEK_DATA_DIR", "/tmp/hideseek"),
            ("HIDESEEK_HOUSE", "Mansion"),
            ("HIDESEEK_OPPONENTS", " Ana , Bob "),
        ]))
        .unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/hideseek"));
        assert_eq!(settings.house, "Mansion");
        assert_eq!(settings.opponents.len(), 2);
        assert_eq!(settings.opponents[0].name().as_str(), "Ana");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings =
            GameSettings::from_lookup(lookup(&[("HIDESEEK_HOUSE", "  ")])).unwrap();
        assert_eq!(settings.house, "DefaultHouse");
    }

    #[test]
    fn empty_opponent_entry_rejected() {
        let err = GameSettings::from_lookup(lookup(&[("HIDESEEK_OPPONENTS", "Ana,,Bob")]))
            .unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
    }

    #[test]
    fn duplicate_opponents_rejected() {
        let err = parse_opponents("Ana,Bob,Ana").unwrap_err();
        assert!(err.to_string().contains("Ana"));
    }

    #[test]
    fn invalid_house_name_rejected() {
        let err = GameSettings::from_lookup(lookup(&[("HIDESEEK_HOUSE", "my/house")]))
            .unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
    }
}
