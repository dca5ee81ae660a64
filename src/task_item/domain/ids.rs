//! Identifier types for the task item domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate key for a persisted task item.
///
/// Identifiers are allocated by the persistence layer on insertion and are
/// immutable afterwards; the domain never invents one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskItemId(i32);

impl TaskItemId {
    /// Wraps a storage-assigned identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the wrapped integer value.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TaskItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
