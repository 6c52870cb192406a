//! API layer - the console entry point.

pub mod console;

pub use console::{Command, Console};
