//! Hideseek Shared - documents that cross the persistence boundary
//!
//! This crate contains the flattened, name-keyed records written to and read
//! from storage:
//! - `SavedGameDocument` - a snapshot of one game in progress
//! - `HouseLayoutDocument` - the layout a `House` is built from
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization; validation
//!    against a live house happens in the engine
//! 3. **No arena ids** - everything is referenced by name

pub mod house_layout;
pub mod saved_game;

pub use house_layout::{HouseLayoutDocument, LocationRecord};
pub use saved_game::SavedGameDocument;
