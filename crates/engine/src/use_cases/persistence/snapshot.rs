//! Conversion between live sessions and saved game documents.
//!
//! Restoring runs as a fixed sequence of stages. Each stage resolves one
//! field against what the earlier stages produced, so a later field is
//! never looked at when an earlier one is bad:
//!
//! 1. house source name -> `House`
//! 2. player location name -> `LocationId` in that house
//! 3. move number -> `u32` of at least 1
//! 4. opponent map -> `HidingAssignment` over hiding locations of that house
//! 5. found names -> opponents already in that assignment
//!
//! Nothing is hidden until all five stages pass.

use std::collections::HashSet;

use hideseek_domain::{HidingAssignment, House, LocationId, Opponent};
use hideseek_shared::SavedGameDocument;

use crate::entities::{HouseLoader, RandomWalker};
use crate::error::GameError;
use crate::use_cases::session::{ensure_unique, GameSession};

/// Flatten a session into its saved document.
///
/// Found opponents keep their last hiding location in the map.
pub fn to_document(session: &GameSession) -> SavedGameDocument {
    let house = session.house();
    SavedGameDocument {
        house_source_name: house.source_name().to_string(),
        player_location: session.current_location().name().to_string(),
        move_number: i64::from(session.move_number()),
        opponents_and_hiding_locations: session
            .assignment()
            .iter()
            .map(|(opponent, target)| {
                (
                    opponent.to_string(),
                    house.location(target).name().to_string(),
                )
            })
            .collect(),
        found_opponents: session.found().iter().map(ToString::to_string).collect(),
    }
}

/// Rebuild a live session from a saved document.
pub fn restore_session(
    document: &SavedGameDocument,
    houses: &HouseLoader,
    walker: RandomWalker,
) -> Result<GameSession, GameError> {
    let mut house = houses.load(&document.house_source_name)?;
    let current = resolve_player_location(&house, &document.player_location)?;
    let move_number = validate_move_number(document.move_number)?;
    let assignment = resolve_assignment(&house, document)?;
    let found = resolve_found(&assignment, &document.found_opponents)?;

    house.clear_all();
    for (opponent, target) in assignment.iter() {
        if !found.contains(opponent) {
            house.hide(opponent.clone(), target)?;
        }
    }

    tracing::debug!(
        house = %house.source_name(),
        opponents = assignment.len(),
        found = found.len(),
        move_number,
        "Restored saved game"
    );
    Ok(GameSession::from_parts(
        house,
        walker,
        current,
        move_number,
        assignment,
        found,
    ))
}

fn resolve_player_location(house: &House, name: &str) -> Result<LocationId, GameError> {
    house
        .find_by_name(name)
        .map(|location| location.id())
        .ok_or_else(|| GameError::not_found("Location", name))
}

fn validate_move_number(move_number: i64) -> Result<u32, GameError> {
    u32::try_from(move_number)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| {
            GameError::validation(format!(
                "Move number must be a positive number, got {}",
                move_number
            ))
        })
}

fn resolve_assignment(
    house: &House,
    document: &SavedGameDocument,
) -> Result<HidingAssignment, GameError> {
    let saved = &document.opponents_and_hiding_locations;
    if saved.is_empty() {
        return Err(GameError::validation(
            "A saved game must hide at least one opponent",
        ));
    }

    let mut entries = Vec::with_capacity(saved.len());
    for (name, location) in saved {
        let opponent = Opponent::named(name.as_str())?;
        let target = house
            .find_hiding_location_by_name(location)
            .ok_or_else(|| {
                GameError::not_found(
                    "Hiding location",
                    format!("{} (hiding place of {})", location, opponent),
                )
            })?
            .id();
        entries.push((opponent, target));
    }

    let opponents: Vec<Opponent> = entries.iter().map(|(o, _)| o.clone()).collect();
    ensure_unique(&opponents)?;
    Ok(entries.into_iter().collect())
}

fn resolve_found(
    assignment: &HidingAssignment,
    names: &[String],
) -> Result<Vec<Opponent>, GameError> {
    let mut seen = HashSet::new();
    let mut found = Vec::with_capacity(names.len());
    for name in names {
        let opponent = Opponent::named(name.as_str())?;
        if !assignment.contains(&opponent) {
            return Err(GameError::validation(format!(
                "Found opponent {} is not one of the hidden opponents",
                opponent
            )));
        }
        if !seen.insert(opponent.clone()) {
            return Err(GameError::validation(format!(
                "Opponent {} was found more than once",
                opponent
            )));
        }
        found.push(opponent);
    }
    Ok(found)
}
