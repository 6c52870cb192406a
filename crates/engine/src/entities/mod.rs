//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations over the house graph. They depend on the
//! infrastructure ports and provide the building blocks for use cases.

pub mod house_loader;
pub mod random_walker;

pub use house_loader::HouseLoader;
pub use random_walker::RandomWalker;
