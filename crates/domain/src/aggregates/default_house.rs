//! The built-in house used when no custom layout is requested.

use crate::aggregates::house::{House, HouseBuilder};
use crate::error::DomainError;
use crate::ids::LocationId;
use crate::value_objects::{Direction, HidingPlace, LocationName};

/// Source name the built-in house answers to.
pub const DEFAULT_HOUSE_SOURCE: &str = "DefaultHouse";

/// Display name of the built-in house.
pub const DEFAULT_HOUSE_NAME: &str = "my house";

/// Build the default two-storey house.
///
/// Entry leads Out to the Garage and East to the Hallway; the Hallway leads
/// Up to the Landing, which fans out to the upstairs rooms and the Attic.
pub fn default_house() -> Result<House, DomainError> {
    let mut b = House::builder(DEFAULT_HOUSE_NAME, DEFAULT_HOUSE_SOURCE);

    let entry = plain(&mut b, "Entry")?;
    let hallway = plain(&mut b, "Hallway")?;
    let landing = plain(&mut b, "Landing")?;

    let garage = hiding(&mut b, "Garage", "behind the car")?;
    let kitchen = hiding(&mut b, "Kitchen", "next to the stove")?;
    let bathroom = hiding(&mut b, "Bathroom", "behind the door")?;
    let living_room = hiding(&mut b, "Living Room", "behind the sofa")?;
    let master_bedroom = hiding(&mut b, "Master Bedroom", "in the closet")?;
    let master_bath = hiding(&mut b, "Master Bath", "in the bathtub")?;
    let second_bathroom = hiding(&mut b, "Second Bathroom", "in the shower")?;
    let nursery = hiding(&mut b, "Nursery", "behind the changing table")?;
    let pantry = hiding(&mut b, "Pantry", "inside a cabinet")?;
    let kids_room = hiding(&mut b, "Kids Room", "under the bed")?;
    let attic = hiding(&mut b, "Attic", "in a trunk")?;

    b.connect(entry, Direction::Out, garage)?;
    b.connect(entry, Direction::East, hallway)?;
    b.connect(hallway, Direction::Northwest, kitchen)?;
    b.connect(hallway, Direction::North, bathroom)?;
    b.connect(hallway, Direction::South, living_room)?;
    b.connect(hallway, Direction::Up, landing)?;
    b.connect(landing, Direction::Northwest, master_bedroom)?;
    b.connect(master_bedroom, Direction::East, master_bath)?;
    b.connect(landing, Direction::West, second_bathroom)?;
    b.connect(landing, Direction::Southwest, nursery)?;
    b.connect(landing, Direction::South, pantry)?;
    b.connect(landing, Direction::Southeast, kids_room)?;
    b.connect(landing, Direction::Up, attic)?;

    b.build(entry)
}

fn plain(b: &mut HouseBuilder, name: &str) -> Result<LocationId, DomainError> {
    b.add_location(LocationName::new(name)?)
}

fn hiding(b: &mut HouseBuilder, name: &str, place: &str) -> Result<LocationId, DomainError> {
    b.add_hiding_location(LocationName::new(name)?, HidingPlace::new(place)?)
}
