//! Task item aggregate root and related lifecycle types.

use super::{TaskItemId, TaskState};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Untrusted candidate fields for creating or updating a task item.
///
/// The state travels as a raw integer because callers can supply values
/// outside the defined range; the validation engine is the only gate
/// between a draft and a persistable [`TaskItemContent`]. A draft carries
/// no creation timestamp: that value is always assigned server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItemDraft {
    title: String,
    description: String,
    state: i16,
    due_date: Option<DateTime<Utc>>,
}

impl TaskItemDraft {
    /// Creates a draft with the default state (`New`) and no due date.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            state: TaskState::New.as_i16(),
            due_date: None,
        }
    }

    /// Sets the raw state value.
    #[must_use]
    pub const fn with_state(mut self, state: i16) -> Self {
        self.state = state;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the raw state value.
    #[must_use]
    pub const fn state(&self) -> i16 {
        self.state
    }

    /// Returns the requested due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }
}

/// Validated, trimmed task item content.
///
/// Produced by the validation engine; the mutable fields of a task item can
/// only be written through a value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItemContent {
    title: String,
    description: String,
    state: TaskState,
    due_date: Option<DateTime<Utc>>,
}

impl TaskItemContent {
    /// Assembles content from already-checked parts.
    ///
    /// Callers are expected to pass values that satisfied the validation
    /// engine; this constructor does not re-run the field rules.
    #[must_use]
    pub const fn new(
        title: String,
        description: String,
        state: TaskState,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            title,
            description,
            state,
            due_date,
        }
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }
}

/// A task item awaiting its first insertion.
///
/// Carries everything except the identifier, which the persistence layer
/// allocates. The creation timestamp is taken from the clock here so that
/// no caller-supplied value can reach storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskItem {
    title: String,
    description: String,
    state: TaskState,
    created_at: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
}

impl NewTaskItem {
    /// Creates an unpersisted task item from validated content.
    #[must_use]
    pub fn new(content: TaskItemContent, clock: &impl Clock) -> Self {
        Self {
            title: content.title,
            description: content.description,
            state: content.state,
            created_at: clock.utc(),
            due_date: content.due_date,
        }
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the server-assigned creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Finalizes the item once the persistence layer has allocated an
    /// identifier.
    #[must_use]
    pub fn into_task_item(self, id: TaskItemId) -> TaskItem {
        TaskItem {
            id,
            title: self.title,
            description: self.description,
            state: self.state,
            created_at: self.created_at,
            due_date: self.due_date,
        }
    }
}

/// Task item aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    id: TaskItemId,
    title: String,
    description: String,
    state: TaskState,
    created_at: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskItemData {
    /// Persisted identifier.
    pub id: TaskItemId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted lifecycle state.
    pub state: TaskState,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskItem {
    /// Reconstructs a task item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskItemData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            state: data.state,
            created_at: data.created_at,
            due_date: data.due_date,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> TaskItemId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Overwrites the mutable fields from validated content.
    ///
    /// The identifier and creation timestamp are write-once and stay
    /// untouched.
    pub fn apply(&mut self, content: TaskItemContent) {
        self.title = content.title;
        self.description = content.description;
        self.state = content.state;
        self.due_date = content.due_date;
    }
}
