//! Results of session commands, each rendering as the message shown to the player.

use std::fmt;

use hideseek_domain::{Direction, Opponent};

/// The player walked through an exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    pub location: String,
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moving {}", self.direction)
    }
}

/// The player searched the current hiding place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub hiding_place: String,
    pub found: Vec<Opponent>,
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found.len() {
            0 => write!(f, "Nobody was hiding {}", self.hiding_place),
            1 => write!(f, "You found 1 opponent hiding {}", self.hiding_place),
            n => write!(f, "You found {} opponents hiding {}", n, self.hiding_place),
        }
    }
}

/// The player was moved to a random hiding location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeleportOutcome {
    pub location: String,
}

impl fmt::Display for TeleportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Teleporting to a random location with a hiding place: {}",
            self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(found: &[&str]) -> CheckOutcome {
        CheckOutcome {
            hiding_place: "behind the car".to_string(),
            found: found.iter().map(|n| Opponent::named(*n).unwrap()).collect(),
        }
    }

    #[test]
    fn check_messages_pluralize() {
        assert_eq!(check(&[]).to_string(), "Nobody was hiding behind the car");
        assert_eq!(
            check(&["Bob"]).to_string(),
            "You found 1 opponent hiding behind the car"
        );
        assert_eq!(
            check(&["Bob", "Ana"]).to_string(),
            "You found 2 opponents hiding behind the car"
        );
    }
}
