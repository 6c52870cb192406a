//! Domain entities

mod opponent;

pub use opponent::Opponent;
