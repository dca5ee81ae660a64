//! Validation engine for task item drafts.
//!
//! Field rules live in [`rules`]; this module aggregates them. All four
//! checks run independently (title, description, state, due date) so a
//! caller sees every problem at once rather than the first one hit.
//! Validation never touches the persistence layer: it is field-level input
//! checking only.

pub mod rules;

use crate::task_item::domain::{TaskItemContent, TaskItemDraft, TaskState};
use chrono::{DateTime, Utc};
use std::fmt;

/// Field of a task item draft that a validation message is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskItemField {
    /// The `title` field.
    Title,
    /// The `description` field.
    Description,
    /// The `state` field.
    State,
    /// The `due_date` field.
    DueDate,
}

impl TaskItemField {
    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::State => "state",
            Self::DueDate => "due_date",
        }
    }
}

impl fmt::Display for TaskItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-scoped validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    field: TaskItemField,
    message: String,
}

impl FieldError {
    /// Creates a field-scoped message.
    #[must_use]
    pub fn new(field: TaskItemField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Returns the field the message is scoped to.
    #[must_use]
    pub const fn field(&self) -> TaskItemField {
        self.field
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of field-scoped validation messages.
///
/// An empty collection means the draft is acceptable for persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Returns `true` when no check failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of failed checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Appends a field error.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Iterates over the errors in check order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Returns the messages recorded for one field.
    pub fn messages_for(&self, field: TaskItemField) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(move |error| error.field() == field)
            .map(FieldError::message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Runs every field rule and returns the validated, trimmed content.
///
/// The returned content is the only doorway to a persistable task item:
/// trimming happens here, and the raw state integer is resolved into a
/// [`TaskState`].
///
/// # Errors
///
/// Returns every failed check as a [`ValidationErrors`] collection, in
/// field order (title, description, state, due date).
pub fn check(draft: &TaskItemDraft, now: DateTime<Utc>) -> Result<TaskItemContent, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let title = rules::checked_title(draft.title()).unwrap_or_else(|error| {
        errors.push(error);
        String::new()
    });
    let description = rules::checked_description(draft.description()).unwrap_or_else(|error| {
        errors.push(error);
        String::new()
    });
    let state = rules::checked_state(draft.state()).unwrap_or_else(|error| {
        errors.push(error);
        TaskState::New
    });
    let due_date = rules::checked_due_date(draft.due_date(), now).unwrap_or_else(|error| {
        errors.push(error);
        None
    });

    if errors.is_empty() {
        Ok(TaskItemContent::new(title, description, state, due_date))
    } else {
        Err(errors)
    }
}

/// Runs every field rule and returns the collected messages.
///
/// An empty result means the draft is acceptable for persistence.
#[must_use]
pub fn validate(draft: &TaskItemDraft, now: DateTime<Utc>) -> ValidationErrors {
    match check(draft, now) {
        Ok(_) => ValidationErrors::default(),
        Err(errors) => errors,
    }
}
