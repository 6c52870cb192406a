//! Value objects - immutable, validated-by-construction domain values.

mod direction;
mod names;

pub use direction::Direction;
pub use names::{DocumentName, HidingPlace, LocationName, OpponentName};
