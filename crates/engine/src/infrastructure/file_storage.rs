//! File-system backed document storage.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::infrastructure::ports::{StorageError, StoragePort};

/// Stores each document as a file named after it inside one directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl StoragePort for FileStorage {
    fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    fn read(&self, name: &str) -> Result<String, StorageError> {
        fs::read_to_string(self.path(name)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(name.to_string()),
            _ => StorageError::io("read", e),
        })
    }

    fn write(&self, name: &str, text: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|e| StorageError::io("write", e))?;
        fs::write(self.path(name), text).map_err(|e| StorageError::io("write", e))
    }

    fn delete(&self, name: &str) -> Result<(), StorageError> {
        fs::remove_file(self.path(name)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(name.to_string()),
            _ => StorageError::io("delete", e),
        })
    }
}
