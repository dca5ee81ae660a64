//! Repository port for task item persistence and lookup.

use crate::task_item::domain::{NewTaskItem, TaskItem, TaskItemId, TaskItemQuery};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task item repository operations.
pub type TaskItemRepositoryResult<T> = Result<T, TaskItemRepositoryError>;

/// Task item persistence contract.
///
/// The core does not interpret storage failures: adapters wrap them in
/// [`TaskItemRepositoryError::Persistence`] and callers let them propagate.
#[async_trait]
pub trait TaskItemRepository: Send + Sync {
    /// Inserts a new task item, allocating its identifier, and returns the
    /// stored row.
    async fn insert(&self, item: NewTaskItem) -> TaskItemRepositoryResult<TaskItem>;

    /// Persists changes to an existing task item.
    ///
    /// # Errors
    ///
    /// Returns [`TaskItemRepositoryError::NotFound`] when no row with the
    /// item's identifier exists.
    async fn update(&self, item: &TaskItem) -> TaskItemRepositoryResult<()>;

    /// Removes a task item. Hard delete; there is no tombstone.
    ///
    /// # Errors
    ///
    /// Returns [`TaskItemRepositoryError::NotFound`] when no row with the
    /// item's identifier exists.
    async fn remove(&self, item: &TaskItem) -> TaskItemRepositoryResult<()>;

    /// Finds a task item by identifier.
    ///
    /// Returns `None` when the task item does not exist.
    async fn find_by_id(&self, id: TaskItemId) -> TaskItemRepositoryResult<Option<TaskItem>>;

    /// Returns the collection narrowed and ordered by the given query.
    ///
    /// Backends are expected to push the filter and sort down to their own
    /// evaluation where they can; the result must match
    /// [`TaskItemQuery::apply`](crate::task_item::domain::TaskItemQuery::apply)
    /// over the full collection.
    async fn list(&self, query: &TaskItemQuery) -> TaskItemRepositoryResult<Vec<TaskItem>>;
}

/// Errors returned by task item repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskItemRepositoryError {
    /// The task item was not found.
    #[error("task item not found: {0}")]
    NotFound(TaskItemId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskItemRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
