//! Opponent entity - someone who hides in the house and waits to be found.

use std::fmt;

use crate::error::DomainError;
use crate::value_objects::OpponentName;

/// An opponent in a game of hide and seek.
///
/// Identity is the (trimmed, case-sensitive) name. Opponents are immutable
/// once created; across a save/load boundary they are rebuilt from their
/// names rather than preserved by reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Opponent {
    name: OpponentName,
}

impl Opponent {
    pub fn new(name: OpponentName) -> Self {
        Self { name }
    }

    /// Convenience constructor that validates a raw name.
    pub fn named(name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::new(OpponentName::new(name)?))
    }

    #[inline]
    pub fn name(&self) -> &OpponentName {
        &self.name
    }
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
