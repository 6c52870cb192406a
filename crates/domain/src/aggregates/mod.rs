//! Aggregate roots - domain objects that own their related data
//!
//! The `House` is the only aggregate: it owns every location, every exit,
//! and every hiding spot's occupants. Ownership (not shared references)
//! enforces that one live game mutates one house.

mod default_house;
mod hiding;
mod house;

pub use default_house::{default_house, DEFAULT_HOUSE_NAME, DEFAULT_HOUSE_SOURCE};
pub use hiding::HidingAssignment;
pub use house::{HidingSpot, House, HouseBuilder, Location, LocationKind};
