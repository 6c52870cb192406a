//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Document storage (could swap the file system for anything key/value)
//! - Random (for testing)

mod error;
mod storage;
mod testing;

pub use error::StorageError;
pub use storage::StoragePort;
pub use testing::RandomPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use storage::MockStoragePort;

#[cfg(test)]
pub use testing::MockRandomPort;
