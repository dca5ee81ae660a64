//! Diesel row models for task item persistence.

use super::schema::task_items;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task item records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskItemRow {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Task item title.
    pub title: String,
    /// Task item description.
    pub description: String,
    /// Lifecycle state as a small integer.
    pub state: i16,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Insert model for task item records.
///
/// The identifier is absent: the column is an identity column and the
/// database allocates it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_items)]
pub struct NewTaskItemRow {
    /// Task item title.
    pub title: String,
    /// Task item description.
    pub description: String,
    /// Lifecycle state as a small integer.
    pub state: i16,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}
