//! Engine error taxonomy.
//!
//! Every failing operation aborts before mutating the session, so callers can
//! report the error and carry on with the game they already had.

use hideseek_domain::DomainError;

use crate::infrastructure::ports::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Malformed identifier, wrong opponent/target count, invalid name.
    #[error("{0}")]
    Validation(String),

    /// Missing document, location, or hiding location.
    #[error("{entity_type} not found: {name}")]
    NotFound {
        entity_type: &'static str,
        name: String,
    },

    /// A save would overwrite an existing document.
    #[error("{0}")]
    Conflict(String),

    /// A stored document could not be understood.
    #[error("Unable to read {document}: {message}")]
    CorruptData { document: String, message: String },

    /// No exit in the requested direction. Benign: the game continues.
    #[error("{0}")]
    Navigation(String),

    /// The operation does not apply to the current location.
    #[error("{0}")]
    State(String),

    /// The storage collaborator failed.
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },
}

impl GameError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(entity_type: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            name: name.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn corrupt(document: impl Into<String>, message: impl ToString) -> Self {
        Self::CorruptData {
            document: document.into(),
            message: message.to_string(),
        }
    }

    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<DomainError> for GameError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, name } => Self::NotFound { entity_type, name },
            DomainError::Validation(msg)
            | DomainError::Constraint(msg)
            | DomainError::Parse(msg) => Self::Validation(msg),
        }
    }
}

impl From<StorageError> for GameError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(name) => Self::not_found("Document", name),
            StorageError::Io { operation, message } => Self::Storage { operation, message },
        }
    }
}
