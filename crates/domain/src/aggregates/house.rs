//! House aggregate - the navigable graph of locations
//!
//! # Arena Design
//!
//! The house owns every location in a single `Vec`. Exits are stored as
//! `LocationId` handles into that arena, never as references, so the
//! bidirectional graph has exactly one owner. A name index keeps lookups O(1).
//!
//! # Invariants
//!
//! - Location names are unique within a house
//! - Exits are symmetric: if A leads `d` to B then B leads `d.opposite()` to A
//! - At most one exit per direction per location
//! - Topology is fixed once `HouseBuilder::build` returns
//! - At least one location is a hiding location
//!
//! Every hiding location is expected to be reachable from the entry. This is
//! not checked; the random walk relies on it to terminate.

use std::collections::{BTreeMap, HashMap};

use crate::entities::Opponent;
use crate::error::DomainError;
use crate::ids::LocationId;
use crate::value_objects::{Direction, HidingPlace, LocationName};

/// What a location can do beyond being walked through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationKind {
    /// An ordinary room or hallway
    Plain,
    /// A location with somewhere to hide
    Hiding(HidingSpot),
}

/// The hiding place of a location and whoever is hiding there right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HidingSpot {
    place: HidingPlace,
    pub(crate) occupants: Vec<Opponent>,
}

impl HidingSpot {
    fn new(place: HidingPlace) -> Self {
        Self {
            place,
            occupants: Vec::new(),
        }
    }

    pub fn place(&self) -> &HidingPlace {
        &self.place
    }

    /// Opponents currently hidden here, in the order they hid.
    pub fn occupants(&self) -> &[Opponent] {
        &self.occupants
    }
}

/// A named node in the house graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: LocationId,
    name: LocationName,
    exits: BTreeMap<Direction, LocationId>,
    pub(crate) kind: LocationKind,
}

impl Location {
    #[inline]
    pub fn id(&self) -> LocationId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &LocationName {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> &LocationKind {
        &self.kind
    }

    /// Exits keyed by direction, iterated in the stable direction order.
    #[inline]
    pub fn exits(&self) -> &BTreeMap<Direction, LocationId> {
        &self.exits
    }

    pub fn exit(&self, direction: Direction) -> Option<LocationId> {
        self.exits.get(&direction).copied()
    }

    pub fn hiding_spot(&self) -> Option<&HidingSpot> {
        match &self.kind {
            LocationKind::Hiding(spot) => Some(spot),
            LocationKind::Plain => None,
        }
    }

    pub fn hiding_place(&self) -> Option<&HidingPlace> {
        self.hiding_spot().map(HidingSpot::place)
    }

    pub fn is_hiding_location(&self) -> bool {
        matches!(self.kind, LocationKind::Hiding(_))
    }
}

/// The root owner of every location in a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    name: String,
    source_name: String,
    entry: LocationId,
    pub(crate) locations: Vec<Location>,
    index: HashMap<LocationName, LocationId>,
}

impl House {
    /// Start building a house.
    ///
    /// `name` is the display name ("my house"); `source_name` is the name of
    /// the layout document the house is built from ("DefaultHouse").
    pub fn builder(name: impl Into<String>, source_name: impl Into<String>) -> HouseBuilder {
        HouseBuilder {
            name: name.into(),
            source_name: source_name.into(),
            locations: Vec::new(),
            index: HashMap::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// The location every game starts in.
    #[inline]
    pub fn entry(&self) -> LocationId {
        self.entry
    }

    /// All locations, in the order they were added.
    #[inline]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Look up a location by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different house.
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    pub fn hiding_locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|l| l.is_hiding_location())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Exact-name lookup. Absence is an ordinary outcome; callers decide
    /// whether it is an error.
    pub fn find_by_name(&self, name: &str) -> Option<&Location> {
        let key = LocationName::new(name).ok()?;
        if key.as_str() != name {
            return None;
        }
        self.index.get(&key).map(|&id| self.location(id))
    }

    /// Exact-name lookup restricted to hiding locations.
    pub fn find_hiding_location_by_name(&self, name: &str) -> Option<&Location> {
        self.find_by_name(name).filter(|l| l.is_hiding_location())
    }

    /// Exits of a location sorted by the stable direction order.
    pub fn exits_of(&self, id: LocationId) -> Vec<(Direction, LocationId)> {
        self.location(id)
            .exits
            .iter()
            .map(|(&direction, &to)| (direction, to))
            .collect()
    }

    /// Human-readable exit list, one phrase per exit, in direction order.
    pub fn exit_descriptions(&self, id: LocationId) -> Vec<String> {
        self.exits_of(id)
            .into_iter()
            .map(|(direction, to)| direction.describe_exit(self.location(to).name().as_str()))
            .collect()
    }
}

/// Builds a `House`, enforcing exit symmetry as connections are made.
#[derive(Debug)]
pub struct HouseBuilder {
    name: String,
    source_name: String,
    locations: Vec<Location>,
    index: HashMap<LocationName, LocationId>,
}

impl HouseBuilder {
    /// Add a plain location.
    pub fn add_location(&mut self, name: LocationName) -> Result<LocationId, DomainError> {
        self.push(name, LocationKind::Plain)
    }

    /// Add a location with a hiding place.
    pub fn add_hiding_location(
        &mut self,
        name: LocationName,
        place: HidingPlace,
    ) -> Result<LocationId, DomainError> {
        self.push(name, LocationKind::Hiding(HidingSpot::new(place)))
    }

    fn push(&mut self, name: LocationName, kind: LocationKind) -> Result<LocationId, DomainError> {
        if self.index.contains_key(&name) {
            return Err(DomainError::constraint(format!(
                "Duplicate location name: {}",
                name
            )));
        }
        let id = LocationId::from_index(self.locations.len());
        self.index.insert(name.clone(), id);
        self.locations.push(Location {
            id,
            name,
            exits: BTreeMap::new(),
            kind,
        });
        Ok(id)
    }

    /// Id of a location added earlier, by exact name.
    pub fn find(&self, name: &str) -> Option<LocationId> {
        let key = LocationName::new(name).ok()?;
        self.index.get(&key).copied()
    }

    /// Connect `from` to `to` in `direction`, and `to` back to `from` in the
    /// opposite direction.
    ///
    /// Re-stating a connection that already exists is accepted. Claiming a
    /// direction that already leads somewhere else is a constraint violation.
    pub fn connect(
        &mut self,
        from: LocationId,
        direction: Direction,
        to: LocationId,
    ) -> Result<(), DomainError> {
        let (Some(from_loc), Some(to_loc)) =
            (self.locations.get(from.index()), self.locations.get(to.index()))
        else {
            return Err(DomainError::constraint(format!(
                "Cannot connect unknown locations {} and {}",
                from, to
            )));
        };
        if from == to {
            return Err(DomainError::constraint(format!(
                "The {} cannot lead to itself",
                from_loc.name
            )));
        }

        let back = direction.opposite();
        let forward_existing = from_loc.exit(direction);
        let back_existing = to_loc.exit(back);
        if forward_existing == Some(to) && back_existing == Some(from) {
            return Ok(());
        }
        if let Some(existing) = forward_existing {
            return Err(DomainError::constraint(format!(
                "The {} already has an exit {} to the {}",
                from_loc.name,
                direction,
                self.locations[existing.index()].name
            )));
        }
        if let Some(existing) = back_existing {
            return Err(DomainError::constraint(format!(
                "The {} already has an exit {} to the {}",
                to_loc.name,
                back,
                self.locations[existing.index()].name
            )));
        }

        self.locations[from.index()].exits.insert(direction, to);
        self.locations[to.index()].exits.insert(back, from);
        Ok(())
    }

    /// Finish the house with `entry` as the starting location.
    pub fn build(self, entry: LocationId) -> Result<House, DomainError> {
        if self.locations.get(entry.index()).is_none() {
            return Err(DomainError::not_found("Entry location", entry.to_string()));
        }
        if !self.locations.iter().any(Location::is_hiding_location) {
            return Err(DomainError::constraint(format!(
                "House {} has no hiding locations",
                self.name
            )));
        }
        Ok(House {
            name: self.name,
            source_name: self.source_name,
            entry,
            locations: self.locations,
            index: self.index,
        })
    }
}
