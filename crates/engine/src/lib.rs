//! Hideseek Engine library.
//!
//! This crate contains the playable side of the game: sessions, persistence,
//! and the console front end.
//!
//! ## Structure
//!
//! - `entities/` - House loading and random walks over the house graph
//! - `use_cases/` - The game session and saved game orchestration
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Console entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod error;
pub mod infrastructure;
pub mod use_cases;

/// Shared test helpers.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
pub use error::GameError;
