//! Individual validation rule implementations.
//!
//! Each rule is a pure function over one draft field. On success it returns
//! the value in the form the domain persists (trimmed text, resolved state
//! enumerant); on failure it returns the field-scoped message.

use super::{FieldError, TaskItemField};
use crate::task_item::domain::TaskState;
use chrono::{DateTime, Months, Utc};

/// Maximum raw title length in characters.
pub const TITLE_MAX_CHARS: usize = 128;

/// Maximum raw description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 4096;

/// How far into the future a due date may lie, in months.
pub const DUE_DATE_HORIZON_MONTHS: u32 = 36;

/// Validates the title and returns its trimmed form.
///
/// The length check runs against the raw, untrimmed value: a title whose
/// surrounding whitespace would bring it under the limit is still rejected.
///
/// # Errors
///
/// Returns a `title` error when the value is empty after trimming or the
/// raw value exceeds [`TITLE_MAX_CHARS`] characters. The two cases never
/// occur together.
pub fn checked_title(raw: &str) -> Result<String, FieldError> {
    checked_text(raw, TaskItemField::Title, "Title", TITLE_MAX_CHARS)
}

/// Validates the description and returns its trimmed form.
///
/// # Errors
///
/// Returns a `description` error under the same rules as [`checked_title`],
/// with the limit at [`DESCRIPTION_MAX_CHARS`] characters.
pub fn checked_description(raw: &str) -> Result<String, FieldError> {
    checked_text(
        raw,
        TaskItemField::Description,
        "Description",
        DESCRIPTION_MAX_CHARS,
    )
}

fn checked_text(
    raw: &str,
    field: TaskItemField,
    display: &str,
    max_chars: usize,
) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(FieldError::new(field, format!("{display} is required.")))
    } else if raw.chars().count() > max_chars {
        Err(FieldError::new(
            field,
            format!("{display} must be at most {max_chars} characters."),
        ))
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Validates a raw state integer against the defined enumerants.
///
/// # Errors
///
/// Returns a `state` error when the value is not one of the defined states.
pub fn checked_state(raw: i16) -> Result<TaskState, FieldError> {
    TaskState::from_i16(raw)
        .map_err(|_| FieldError::new(TaskItemField::State, "State is invalid."))
}

/// Validates an optional due date against the allowed window.
///
/// An absent due date is valid. A present one must fall between `now` and
/// `now` plus [`DUE_DATE_HORIZON_MONTHS`] months; the error message embeds
/// both computed bounds so the caller can render them.
///
/// # Errors
///
/// Returns a `due_date` error when the value lies outside the window.
pub fn checked_due_date(
    due_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, FieldError> {
    let Some(due) = due_date else {
        return Ok(None);
    };

    let horizon = now
        .checked_add_months(Months::new(DUE_DATE_HORIZON_MONTHS))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    if due < now || due > horizon {
        return Err(FieldError::new(
            TaskItemField::DueDate,
            format!(
                "Due date must fall between {} and {}.",
                now.format("%Y-%m-%d"),
                horizon.format("%Y-%m-%d"),
            ),
        ));
    }

    Ok(Some(due))
}
