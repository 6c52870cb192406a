//! Hideseek Domain - the house graph and the hide protocol.
//!
//! Pure domain types with no I/O and no source of randomness. The engine
//! crate drives these through ports.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{
    default_house, HidingAssignment, HidingSpot, House, HouseBuilder, Location, LocationKind,
    DEFAULT_HOUSE_NAME, DEFAULT_HOUSE_SOURCE,
};
pub use entities::Opponent;
pub use error::DomainError;
pub use ids::LocationId;
pub use value_objects::{Direction, DocumentName, HidingPlace, LocationName, OpponentName};
