//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod file_storage;
pub mod ports;
pub mod random;
pub mod settings;
