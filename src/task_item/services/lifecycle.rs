//! Service layer for the task item lifecycle.
//!
//! Implements the five operations over the repository port: list, detail,
//! create, update, delete. Validation gates every write, the existence
//! check for updates runs after validation, and the only failures that
//! propagate untranslated are repository errors.

use crate::task_item::{
    domain::{NewTaskItem, TaskItem, TaskItemDraft, TaskItemId, TaskItemQuery},
    ports::{TaskItemRepository, TaskItemRepositoryError},
    validation::{self, ValidationErrors},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

const CREATED_MESSAGE: &str = "Task item was created.";
const UPDATED_MESSAGE: &str = "Task item was updated.";
const DELETED_MESSAGE: &str = "Task item was deleted.";
const NOT_FOUND_MESSAGE: &str = "Task item was not found.";

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    /// The operation completed.
    Success,
    /// The operation could not be carried out.
    Danger,
}

impl NoticeSeverity {
    /// Returns the lowercase token used by presentation layers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

/// One-shot user-facing message surfaced on the next rendered response.
///
/// Returned alongside operation results rather than stashed in ambient
/// state; the presentation layer owns carrying it into the next view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    severity: NoticeSeverity,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: NoticeSeverity::Success,
        }
    }

    /// Creates a danger notice.
    #[must_use]
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: NoticeSeverity::Danger,
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> NoticeSeverity {
        self.severity
    }
}

/// Operation payload paired with its one-shot notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithNotice<T> {
    value: T,
    notice: Notice,
}

impl<T> WithNotice<T> {
    const fn new(value: T, notice: Notice) -> Self {
        Self { value, notice }
    }

    /// Returns the operation payload.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the notice.
    #[must_use]
    pub const fn notice(&self) -> &Notice {
        &self.notice
    }

    /// Splits into payload and notice.
    #[must_use]
    pub fn into_parts(self) -> (T, Notice) {
        (self.value, self.notice)
    }
}

/// Result of listing task items: the rows plus the normalized echo values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItemListing {
    items: Vec<TaskItem>,
    query: TaskItemQuery,
}

impl TaskItemListing {
    const fn new(items: Vec<TaskItem>, query: TaskItemQuery) -> Self {
        Self { items, query }
    }

    /// Returns the listed task items in final order.
    #[must_use]
    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    /// Consumes the listing and returns the rows.
    #[must_use]
    pub fn into_items(self) -> Vec<TaskItem> {
        self.items
    }

    /// Returns the canonical sort key name, also when it was defaulted.
    #[must_use]
    pub const fn normalized_sort(&self) -> &'static str {
        self.query.sort().as_str()
    }

    /// Returns the canonical state filter name, or `None` when the listing
    /// is unfiltered.
    #[must_use]
    pub fn normalized_state(&self) -> Option<&'static str> {
        self.query.filter().normalized()
    }
}

/// Validation outcome carried back to the caller for form re-entry.
///
/// Holds the field-scoped messages together with the draft exactly as it
/// was submitted; no partial normalization leaks back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    errors: ValidationErrors,
    draft: TaskItemDraft,
}

impl ValidationFailure {
    /// Returns the field-scoped messages.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the submitted draft, unchanged.
    #[must_use]
    pub const fn draft(&self) -> &TaskItemDraft {
        &self.draft
    }
}

/// Service-level errors for task item lifecycle operations.
///
/// `Validation` and `NotFound` are recoverable, user-facing outcomes;
/// `Repository` failures are the sole fatal class and propagate untouched.
#[derive(Debug, Error)]
pub enum TaskItemLifecycleError {
    /// The submitted draft failed field validation.
    #[error("task item validation failed: {}", .0.errors())]
    Validation(Box<ValidationFailure>),

    /// No task item with the requested identifier exists.
    #[error("task item not found: {0}")]
    NotFound(TaskItemId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskItemRepositoryError),
}

impl TaskItemLifecycleError {
    fn validation(errors: ValidationErrors, draft: TaskItemDraft) -> Self {
        Self::Validation(Box::new(ValidationFailure { errors, draft }))
    }

    /// Returns the danger notice for user-facing failures.
    ///
    /// Validation failures carry their messages per field instead of a
    /// notice, and repository failures are not surfaced to end users.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::NotFound(_) => Some(Notice::danger(NOT_FOUND_MESSAGE)),
            Self::Validation(_) | Self::Repository(_) => None,
        }
    }
}

/// Result type for task item lifecycle operations.
pub type TaskItemLifecycleResult<T> = Result<T, TaskItemLifecycleError>;

/// Task item lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskItemService<R, C>
where
    R: TaskItemRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskItemService<R, C>
where
    R: TaskItemRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task item lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists task items, narrowed and ordered by the given parameters.
    ///
    /// Unrecognized parameters never fail the operation; they normalize to
    /// the defaults and the listing echoes the resolved values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskItemLifecycleError::Repository`] when the backing
    /// collection cannot be read.
    pub async fn list(
        &self,
        sort: Option<&str>,
        state: Option<&str>,
    ) -> TaskItemLifecycleResult<TaskItemListing> {
        let query = TaskItemQuery::from_params(sort, state);
        let items = self.repository.list(&query).await?;
        tracing::debug!(
            count = items.len(),
            sort = query.sort().as_str(),
            state = query.filter().normalized(),
            "listed task items"
        );
        Ok(TaskItemListing::new(items, query))
    }

    /// Retrieves a single task item.
    ///
    /// # Errors
    ///
    /// Returns [`TaskItemLifecycleError::NotFound`] when the identifier is
    /// unknown; the caller is expected to surface the notice and fall back
    /// to the list view.
    pub async fn detail(&self, id: TaskItemId) -> TaskItemLifecycleResult<TaskItem> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskItemLifecycleError::NotFound(id))
    }

    /// Creates a task item from an untrusted draft.
    ///
    /// Validation gates persistence: nothing is written unless every field
    /// rule passes. On success the storage layer assigns the identifier,
    /// the clock assigns the creation timestamp, and the trimmed content is
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskItemLifecycleError::Validation`] with the messages and
    /// the unchanged draft, or [`TaskItemLifecycleError::Repository`] when
    /// the write fails.
    pub async fn create(
        &self,
        draft: TaskItemDraft,
    ) -> TaskItemLifecycleResult<WithNotice<TaskItem>> {
        let content = match validation::check(&draft, self.clock.utc()) {
            Ok(content) => content,
            Err(errors) => return Err(TaskItemLifecycleError::validation(errors, draft)),
        };

        let item = self
            .repository
            .insert(NewTaskItem::new(content, &*self.clock))
            .await?;
        tracing::info!(id = item.id().into_inner(), "created task item");
        Ok(WithNotice::new(item, Notice::success(CREATED_MESSAGE)))
    }

    /// Updates the mutable fields of an existing task item.
    ///
    /// Validation runs first, before the existence check, so an invalid
    /// draft against a missing identifier reports the validation failure.
    /// Only title, description, state, and due date are written; identifier
    /// and creation timestamp stay untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskItemLifecycleError::Validation`] with the messages and
    /// the unchanged draft, [`TaskItemLifecycleError::NotFound`] for an
    /// unknown identifier, or [`TaskItemLifecycleError::Repository`] when
    /// the write fails.
    pub async fn update(
        &self,
        id: TaskItemId,
        draft: TaskItemDraft,
    ) -> TaskItemLifecycleResult<WithNotice<TaskItem>> {
        let content = match validation::check(&draft, self.clock.utc()) {
            Ok(content) => content,
            Err(errors) => return Err(TaskItemLifecycleError::validation(errors, draft)),
        };

        let Some(mut item) = self.repository.find_by_id(id).await? else {
            return Err(TaskItemLifecycleError::NotFound(id));
        };
        item.apply(content);
        self.repository.update(&item).await?;
        tracing::info!(id = id.into_inner(), "updated task item");
        Ok(WithNotice::new(item, Notice::success(UPDATED_MESSAGE)))
    }

    /// Deletes a task item. Hard delete, idempotent in effect: repeating
    /// the call for an already-absent identifier reports `NotFound` again
    /// rather than failing differently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskItemLifecycleError::NotFound`] for an unknown
    /// identifier or [`TaskItemLifecycleError::Repository`] when the
    /// removal fails.
    pub async fn delete(&self, id: TaskItemId) -> TaskItemLifecycleResult<Notice> {
        let Some(item) = self.repository.find_by_id(id).await? else {
            return Err(TaskItemLifecycleError::NotFound(id));
        };
        self.repository.remove(&item).await?;
        tracing::info!(id = id.into_inner(), "deleted task item");
        Ok(Notice::success(DELETED_MESSAGE))
    }
}
