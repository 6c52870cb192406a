//! Use cases - User story orchestration.
//!
//! `session` plays the game; `persistence` moves it in and out of storage.

pub mod persistence;
pub mod session;

pub use persistence::SaveGames;
pub use session::GameSession;
