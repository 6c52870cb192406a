//! The game session state machine.
//!
//! A session is Active while some opponents are still hidden and Won once
//! every opponent has been found. Every command either fully applies or
//! leaves the session exactly as it was.

use std::collections::HashSet;

use hideseek_domain::{Direction, HidingAssignment, House, Location, LocationId, Opponent};

use super::outcomes::{CheckOutcome, MoveOutcome, TeleportOutcome};
use crate::entities::RandomWalker;
use crate::error::GameError;

#[derive(Debug)]
pub struct GameSession {
    house: House,
    walker: RandomWalker,
    current: LocationId,
    move_number: u32,
    assignment: HidingAssignment,
    found: Vec<Opponent>,
}

impl GameSession {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Start a new game: the player stands in the entry and every opponent
    /// hides at a random hiding location.
    pub fn start(
        mut house: House,
        opponents: Vec<Opponent>,
        walker: RandomWalker,
    ) -> Result<Self, GameError> {
        if opponents.is_empty() {
            return Err(GameError::validation("A game needs at least one opponent"));
        }
        ensure_unique(&opponents)?;

        let targets = random_targets(&walker, &house, opponents.len())?;
        let assignment = house.rehide_all(&opponents, &targets)?;
        tracing::info!(
            house = %house.source_name(),
            opponents = assignment.len(),
            "Started new game"
        );

        Ok(Self {
            current: house.entry(),
            house,
            walker,
            move_number: 1,
            assignment,
            found: Vec::new(),
        })
    }

    /// Assemble a session from already-validated parts. The house's hiding
    /// spots must already hold every unfound opponent.
    pub(crate) fn from_parts(
        house: House,
        walker: RandomWalker,
        current: LocationId,
        move_number: u32,
        assignment: HidingAssignment,
        found: Vec<Opponent>,
    ) -> Self {
        Self {
            house,
            walker,
            current,
            move_number,
            assignment,
            found,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn house(&self) -> &House {
        &self.house
    }

    #[inline]
    pub fn current_location_id(&self) -> LocationId {
        self.current
    }

    pub fn current_location(&self) -> &Location {
        self.house.location(self.current)
    }

    #[inline]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Where every opponent was last sent, found or not.
    #[inline]
    pub fn assignment(&self) -> &HidingAssignment {
        &self.assignment
    }

    /// Opponents found so far, in the order they were found.
    #[inline]
    pub fn found(&self) -> &[Opponent] {
        &self.found
    }

    pub fn is_game_over(&self) -> bool {
        self.found.len() == self.assignment.len()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Walk through the exit in `direction`.
    ///
    /// With no such exit nothing changes and a `Navigation` error names the
    /// missing direction.
    pub fn go(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        let from = self.current_location();
        let Some(to) = from.exit(direction) else {
            return Err(GameError::navigation(format!(
                "There is no exit {} from the {}",
                direction,
                from.name()
            )));
        };

        let move_number = self.next_move_number()?;
        self.current = to;
        self.move_number = move_number;
        let location = self.current_location().name().to_string();
        tracing::debug!(
            direction = %direction,
            location = %location,
            move_number = self.move_number,
            "Player moved"
        );
        Ok(MoveOutcome {
            direction,
            location,
        })
    }

    /// Search the current location, collecting everyone hiding there.
    ///
    /// Plain locations cannot be searched; that costs no move.
    pub fn check_current_location(&mut self) -> Result<CheckOutcome, GameError> {
        let location = self.current_location();
        let Some(place) = location.hiding_place() else {
            return Err(GameError::state(format!(
                "There is no hiding place in the {}",
                location.name()
            )));
        };
        let hiding_place = place.to_string();
        let move_number = self.next_move_number()?;

        let revealed = self.house.reveal(self.current)?;
        self.move_number = move_number;
        self.found.extend(revealed.iter().cloned());

        tracing::info!(
            location = %self.current_location().name(),
            found = revealed.len(),
            total_found = self.found.len(),
            move_number = self.move_number,
            "Checked hiding place"
        );
        Ok(CheckOutcome {
            hiding_place,
            found: revealed,
        })
    }

    /// Jump to a random hiding location. Nothing is revealed on arrival.
    pub fn teleport(&mut self) -> Result<TeleportOutcome, GameError> {
        let move_number = self.next_move_number()?;
        let destination = self.walker.random_hiding_location(&self.house)?;
        self.current = destination;
        self.move_number = move_number;

        let location = self.current_location().name().to_string();
        tracing::info!(location = %location, move_number = self.move_number, "Teleported");
        Ok(TeleportOutcome { location })
    }

    /// Start over, optionally in a different house and optionally with the
    /// hiding location of each opponent spelled out (in opponent order).
    ///
    /// Without explicit hiding locations each opponent gets an independent
    /// random one. On any error the current game is left untouched.
    pub fn restart(
        &mut self,
        house: Option<House>,
        hiding_locations: Option<&[&str]>,
    ) -> Result<(), GameError> {
        let opponents = self.assignment.opponents();
        let mut next_house = house.unwrap_or_else(|| self.house.clone());

        let targets = match hiding_locations {
            Some(names) => resolve_hiding_targets(&next_house, names, opponents.len())?,
            None => random_targets(&self.walker, &next_house, opponents.len())?,
        };
        let assignment = next_house.rehide_all(&opponents, &targets)?;

        self.current = next_house.entry();
        self.house = next_house;
        self.move_number = 1;
        self.assignment = assignment;
        self.found.clear();

        tracing::info!(
            house = %self.house.source_name(),
            opponents = self.assignment.len(),
            "Restarted game"
        );
        Ok(())
    }

    fn next_move_number(&self) -> Result<u32, GameError> {
        self.move_number.checked_add(1).ok_or_else(|| {
            GameError::state(format!(
                "The move counter cannot go past {}; start a new game",
                self.move_number
            ))
        })
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Where the player is, the exits, any hiding place, and progress so far.
    pub fn status(&self) -> String {
        let location = self.current_location();
        let mut lines = vec![format!(
            "You are in the {}. You see the following exits:",
            location.name()
        )];
        lines.extend(
            self.house
                .exit_descriptions(self.current)
                .into_iter()
                .map(|exit| format!(" - {}", exit)),
        );
        if let Some(place) = location.hiding_place() {
            lines.push(format!("Someone could hide {}", place));
        }
        lines.push(self.found_summary());
        lines.join("\n")
    }

    fn found_summary(&self) -> String {
        if self.found.is_empty() {
            return "You have not found any opponents".to_string();
        }
        let names: Vec<String> = self.found.iter().map(ToString::to_string).collect();
        let total = self.assignment.len();
        format!(
            "You have found {} of {} opponent{}: {}",
            self.found.len(),
            total,
            if total == 1 { "" } else { "s" },
            names.join(", ")
        )
    }

    pub fn prompt(&self) -> String {
        format!(
            "{}: Which direction do you want to go (or type 'check'): ",
            self.move_number
        )
    }
}

/// Opponents are keyed by name in saved games, so names must not repeat.
pub fn ensure_unique(opponents: &[Opponent]) -> Result<(), GameError> {
    let mut seen = HashSet::new();
    for opponent in opponents {
        if !seen.insert(opponent.name()) {
            return Err(GameError::validation(format!(
                "Opponent {} appears more than once",
                opponent
            )));
        }
    }
    Ok(())
}

fn random_targets(
    walker: &RandomWalker,
    house: &House,
    count: usize,
) -> Result<Vec<LocationId>, GameError> {
    (0..count)
        .map(|_| walker.random_hiding_location(house))
        .collect()
}

fn resolve_hiding_targets(
    house: &House,
    names: &[&str],
    expected: usize,
) -> Result<Vec<LocationId>, GameError> {
    if names.len() != expected {
        return Err(GameError::validation(format!(
            "Expected {} hiding locations, one per opponent, but got {}",
            expected,
            names.len()
        )));
    }
    names
        .iter()
        .map(|name| {
            house
                .find_hiding_location_by_name(name)
                .map(Location::id)
                .ok_or_else(|| GameError::not_found("Hiding location", *name))
        })
        .collect()
}
