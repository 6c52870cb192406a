//! Hide protocol - who is hiding where inside a `House`
//!
//! Occupants live on the hiding locations themselves; `HidingAssignment`
//! is the session-side record of where each opponent was last sent.
//! `rehide_all` validates everything before touching any occupant list, so
//! a rejected rehide leaves the house exactly as it was.

use crate::aggregates::house::{House, LocationKind};
use crate::entities::Opponent;
use crate::error::DomainError;
use crate::ids::LocationId;

/// Opponent -> hiding location, in opponent insertion order.
///
/// The order matters: `rehide_all` pairs opponents with targets by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HidingAssignment {
    entries: Vec<(Opponent, LocationId)>,
}

impl HidingAssignment {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Opponent, LocationId)> {
        self.entries.iter().map(|(o, l)| (o, *l))
    }

    /// Opponents in insertion order.
    pub fn opponents(&self) -> Vec<Opponent> {
        self.entries.iter().map(|(o, _)| o.clone()).collect()
    }

    pub fn target_of(&self, opponent: &Opponent) -> Option<LocationId> {
        self.entries
            .iter()
            .find(|(o, _)| o == opponent)
            .map(|(_, l)| *l)
    }

    pub fn contains(&self, opponent: &Opponent) -> bool {
        self.target_of(opponent).is_some()
    }
}

impl FromIterator<(Opponent, LocationId)> for HidingAssignment {
    fn from_iter<I: IntoIterator<Item = (Opponent, LocationId)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl House {
    /// Hide `opponent` at `at`. Any number of opponents may share a spot.
    pub fn hide(&mut self, opponent: Opponent, at: LocationId) -> Result<(), DomainError> {
        let location = self
            .locations
            .get_mut(at.index())
            .ok_or_else(|| DomainError::not_found("Hiding location", at.to_string()))?;
        if let LocationKind::Hiding(spot) = &mut location.kind {
            spot.occupants.push(opponent);
            return Ok(());
        }
        Err(DomainError::constraint(format!(
            "There is no hiding place in the {}",
            location.name()
        )))
    }

    /// Drain and return everyone hiding at `at`. A second call with no hide
    /// in between returns nothing.
    pub fn reveal(&mut self, at: LocationId) -> Result<Vec<Opponent>, DomainError> {
        let location = self
            .locations
            .get_mut(at.index())
            .ok_or_else(|| DomainError::not_found("Hiding location", at.to_string()))?;
        if let LocationKind::Hiding(spot) = &mut location.kind {
            return Ok(std::mem::take(&mut spot.occupants));
        }
        Err(DomainError::constraint(format!(
            "There is no hiding place in the {}",
            location.name()
        )))
    }

    /// Empty every hiding spot in the house.
    pub fn clear_all(&mut self) {
        for location in &mut self.locations {
            if let LocationKind::Hiding(spot) = &mut location.kind {
                spot.occupants.clear();
            }
        }
    }

    /// Opponents currently hidden at `at` (empty for plain locations).
    pub fn occupants(&self, at: LocationId) -> &[Opponent] {
        self.get(at)
            .and_then(|l| l.hiding_spot())
            .map(|spot| spot.occupants())
            .unwrap_or_default()
    }

    /// Clear every hiding spot, then hide `opponents[i]` at `targets[i]`.
    ///
    /// Fails without touching any spot if the counts differ or any target
    /// is not a hiding location of this house.
    pub fn rehide_all(
        &mut self,
        opponents: &[Opponent],
        targets: &[LocationId],
    ) -> Result<HidingAssignment, DomainError> {
        if opponents.len() != targets.len() {
            return Err(DomainError::validation(format!(
                "Expected {} hiding locations, one per opponent, but got {}",
                opponents.len(),
                targets.len()
            )));
        }
        for &target in targets {
            match self.get(target) {
                Some(l) if l.is_hiding_location() => {}
                Some(l) => {
                    return Err(DomainError::not_found(
                        "Hiding location",
                        l.name().as_str(),
                    ))
                }
                None => return Err(DomainError::not_found("Hiding location", target.to_string())),
            }
        }

        self.clear_all();
        let assignment: HidingAssignment = opponents
            .iter()
            .cloned()
            .zip(targets.iter().copied())
            .collect();
        for (opponent, target) in assignment.iter() {
            self.hide(opponent.clone(), target)?;
        }
        Ok(assignment)
    }
}
