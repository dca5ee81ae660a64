//! Task item lifecycle state and its display registry.

use super::{InvalidTaskState, ParseTaskStateError};
use serde::{Deserialize, Serialize};

/// Task item lifecycle state.
///
/// Persisted as a small integer (`0`, `1`, `2`); the canonical token form
/// (`"New"`, `"Active"`, `"Completed"`) is used for request parameters and
/// normalized echoes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    /// Work has been captured but not started.
    #[default]
    New,
    /// Work is underway.
    Active,
    /// Work is finished.
    Completed,
}

impl TaskState {
    /// Every defined state, in persisted-value order.
    pub const ALL: [Self; 3] = [Self::New, Self::Active, Self::Completed];

    /// Returns the canonical token used in request parameters and echoes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Returns the human-readable label for list views and badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Returns the persisted integer representation.
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::New => 0,
            Self::Active => 1,
            Self::Completed => 2,
        }
    }

    /// Parses a persisted or caller-supplied integer value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTaskState`] when the value is not one of the defined
    /// enumerants. Untrusted callers can supply any integer, so this guard
    /// backs the state check in the validation engine.
    pub const fn from_i16(value: i16) -> Result<Self, InvalidTaskState> {
        match value {
            0 => Ok(Self::New),
            1 => Ok(Self::Active),
            2 => Ok(Self::Completed),
            other => Err(InvalidTaskState(other)),
        }
    }

    /// Returns value/label pairs for every state, for select-list rendering.
    #[must_use]
    pub fn options() -> Vec<(i16, &'static str)> {
        Self::ALL
            .into_iter()
            .map(|state| (state.as_i16(), state.label()))
            .collect()
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStateError(value.to_owned())),
        }
    }
}
