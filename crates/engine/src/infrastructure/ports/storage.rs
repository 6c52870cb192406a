//! Document storage port.

use super::error::StorageError;

/// Named text documents (saved games, house layouts).
///
/// Implementations never overwrite on their own initiative; callers check
/// `exists` first when a write must not clobber anything.
#[cfg_attr(test, mockall::automock)]
pub trait StoragePort: Send + Sync {
    fn exists(&self, name: &str) -> bool;
    fn read(&self, name: &str) -> Result<String, StorageError>;
    fn write(&self, name: &str, text: &str) -> Result<(), StorageError>;
    fn delete(&self, name: &str) -> Result<(), StorageError>;
}
