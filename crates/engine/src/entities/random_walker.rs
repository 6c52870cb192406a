//! Random walks over the house graph.

use std::sync::Arc;

use hideseek_domain::{House, LocationId};

use crate::error::GameError;
use crate::infrastructure::ports::RandomPort;

/// Fewest counted steps a walk takes before looking for a hiding place.
pub const MIN_WALK_STEPS: usize = 10;
/// Most counted steps a walk takes before looking for a hiding place.
pub const MAX_WALK_STEPS: usize = 50;

/// Picks random exits and random hiding locations.
#[derive(Clone)]
pub struct RandomWalker {
    random: Arc<dyn RandomPort>,
}

impl std::fmt::Debug for RandomWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomWalker").finish_non_exhaustive()
    }
}

impl RandomWalker {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// A uniformly chosen neighbor of `from`, indexing the exits in their
    /// stable direction order.
    pub fn random_exit(&self, house: &House, from: LocationId) -> Result<LocationId, GameError> {
        let exits = house.exits_of(from);
        if exits.is_empty() {
            return Err(GameError::state(format!(
                "The {} has no exits",
                house.location(from).name()
            )));
        }
        let index = self.random.gen_range(0, exits.len() - 1);
        exits.get(index).map(|&(_, to)| to).ok_or_else(|| {
            GameError::state(format!(
                "Random exit {} out of range for the {}",
                index,
                house.location(from).name()
            ))
        })
    }

    /// Walk from the entry for 10..=50 random steps, then keep walking until
    /// standing in a hiding location.
    ///
    /// Terminates only if a hiding location is reachable from the entry.
    pub fn random_hiding_location(&self, house: &House) -> Result<LocationId, GameError> {
        let mut current = house.entry();
        let steps = self.random.gen_range(MIN_WALK_STEPS, MAX_WALK_STEPS);
        for _ in 0..steps {
            current = self.random_exit(house, current)?;
        }

        let mut extra_steps = 0usize;
        while !house.location(current).is_hiding_location() {
            current = self.random_exit(house, current)?;
            extra_steps += 1;
        }

        tracing::debug!(
            steps,
            extra_steps,
            location = %house.location(current).name(),
            "Random walk reached a hiding location"
        );
        Ok(current)
    }
}
