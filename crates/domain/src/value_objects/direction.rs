//! Compass and vertical directions used to label exits between locations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A direction an exit can lead in.
///
/// Declaration order is the stable ordering used for exit lists and for
/// random exit selection (`Ord` is derived from it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northeast,
    Southwest,
    Southeast,
    Northwest,
    Up,
    Down,
    In,
    Out,
}

impl Direction {
    /// All directions in their stable order.
    pub const ALL: [Direction; 12] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Northeast,
        Direction::Southwest,
        Direction::Southeast,
        Direction::Northwest,
        Direction::Up,
        Direction::Down,
        Direction::In,
        Direction::Out,
    ];

    /// The direction leading back the way you came.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Northeast => Self::Southwest,
            Self::Southwest => Self::Northeast,
            Self::Southeast => Self::Northwest,
            Self::Northwest => Self::Southeast,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }

    /// Whether this is a compass direction ("to the East") rather than a
    /// vertical or threshold one ("Up", "Out").
    pub fn is_compass(self) -> bool {
        !matches!(self, Self::Up | Self::Down | Self::In | Self::Out)
    }

    /// Human-readable phrase for an exit to `destination`, e.g.
    /// "the Hallway is to the East" or "the Garage is Out".
    pub fn describe_exit(self, destination: &str) -> String {
        if self.is_compass() {
            format!("the {} is to the {}", destination, self)
        } else {
            format!("the {} is {}", destination, self)
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Northeast => "Northeast",
            Self::Southwest => "Southwest",
            Self::Southeast => "Southeast",
            Self::Northwest => "Northwest",
            Self::Up => "Up",
            Self::Down => "Down",
            Self::In => "In",
            Self::Out => "Out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Self::North),
            "south" | "s" => Ok(Self::South),
            "east" | "e" => Ok(Self::East),
            "west" | "w" => Ok(Self::West),
            "northeast" | "ne" => Ok(Self::Northeast),
            "southwest" | "sw" => Ok(Self::Southwest),
            "southeast" | "se" => Ok(Self::Southeast),
            "northwest" | "nw" => Ok(Self::Northwest),
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            "in" | "i" => Ok(Self::In),
            "out" | "o" => Ok(Self::Out),
            _ => Err(DomainError::parse(format!("Unknown direction: {}", s))),
        }
    }
}
