//! Persistence use cases.
//!
//! Saved games cross the storage boundary as `SavedGameDocument`s and are
//! re-validated against their house on the way back in.

mod save_games;
mod snapshot;

pub use save_games::{game_key, SaveGames};
pub use snapshot::{restore_session, to_document};
