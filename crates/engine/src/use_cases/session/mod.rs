//! Session use cases.
//!
//! Owns the live game: the player's position, the move counter, and who has
//! been found so far.

mod game_session;
mod outcomes;

pub use game_session::{ensure_unique, GameSession};
pub use outcomes::{CheckOutcome, MoveOutcome, TeleportOutcome};
