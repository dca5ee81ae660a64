//! Query model: sort keys and state filters over the task item collection.
//!
//! Both halves are plain values a storage backend can translate into its
//! own deferred form (an `ORDER BY` clause, a `WHERE` clause) instead of
//! forcing materialization. The in-memory evaluation in
//! [`TaskItemQuery::apply`] is the reference semantics either way: filtering
//! only removes rows and sorting only reorders them, so the two transforms
//! commute.

use super::{ParseSortKeyError, TaskItem, TaskState};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Request-time sort key for the task item list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Newest first by creation time. The default and the fallback.
    #[default]
    CreatedAt,
    /// Ascending lexicographic by title.
    Title,
    /// Ascending by due date; items without a due date sort last.
    DueDate,
}

impl SortKey {
    /// Every defined sort key.
    pub const ALL: [Self; 3] = [Self::CreatedAt, Self::Title, Self::DueDate];

    /// Parses a caller-supplied sort parameter, defaulting to `CreatedAt`
    /// when the token is missing or unrecognized.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|token| Self::try_from(token).ok())
            .unwrap_or_default()
    }

    /// Returns the canonical token echoed back to callers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "CreatedAt",
            Self::Title => "Title",
            Self::DueDate => "DueDate",
        }
    }

    /// Returns the human-readable label for sort selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreatedAt => "Created",
            Self::Title => "Title",
            Self::DueDate => "Due date",
        }
    }

    /// Comparator form of this sort key.
    ///
    /// `DueDate` uses a two-key comparison: presence of a due date first
    /// (absent sorts after present), then the due date itself ascending.
    #[must_use]
    pub fn compare(self, a: &TaskItem, b: &TaskItem) -> Ordering {
        match self {
            Self::CreatedAt => b.created_at().cmp(&a.created_at()),
            Self::Title => a.title().cmp(b.title()),
            Self::DueDate => a
                .due_date()
                .is_none()
                .cmp(&b.due_date().is_none())
                .then_with(|| a.due_date().cmp(&b.due_date())),
        }
    }
}

impl TryFrom<&str> for SortKey {
    type Error = ParseSortKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "createdat" => Ok(Self::CreatedAt),
            "title" => Ok(Self::Title),
            "duedate" => Ok(Self::DueDate),
            _ => Err(ParseSortKeyError(value.to_owned())),
        }
    }
}

/// Optional narrowing of the task item collection to a single state.
///
/// Absence means "all states". Predicate form for in-memory evaluation is
/// [`StateFilter::matches`]; backends with their own query language read
/// the target state through [`StateFilter::state`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateFilter(Option<TaskState>);

impl StateFilter {
    /// A filter that keeps every state.
    #[must_use]
    pub const fn unfiltered() -> Self {
        Self(None)
    }

    /// A filter that keeps only the given state.
    #[must_use]
    pub const fn only(state: TaskState) -> Self {
        Self(Some(state))
    }

    /// Parses a caller-supplied state parameter.
    ///
    /// Missing, empty, or unrecognized tokens (matched case-insensitively)
    /// resolve to the unfiltered form.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        Self(raw.and_then(|token| TaskState::try_from(token).ok()))
    }

    /// Returns the target state, if the filter narrows at all.
    #[must_use]
    pub const fn state(&self) -> Option<TaskState> {
        self.0
    }

    /// Predicate form of this filter.
    #[must_use]
    pub fn matches(&self, item: &TaskItem) -> bool {
        self.0.is_none_or(|state| item.state() == state)
    }

    /// Returns the canonical name echoed back to callers, or `None` when
    /// the collection is unfiltered.
    #[must_use]
    pub fn normalized(&self) -> Option<&'static str> {
        self.0.map(TaskState::as_str)
    }
}

/// Combined filter and sort over the task item collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskItemQuery {
    filter: StateFilter,
    sort: SortKey,
}

impl TaskItemQuery {
    /// Creates a query from explicit filter and sort values.
    #[must_use]
    pub const fn new(filter: StateFilter, sort: SortKey) -> Self {
        Self { filter, sort }
    }

    /// Normalizes raw request parameters into a query.
    ///
    /// Unrecognized tokens silently resolve to the defaults: unfiltered,
    /// sorted by creation time.
    #[must_use]
    pub fn from_params(sort: Option<&str>, state: Option<&str>) -> Self {
        Self {
            filter: StateFilter::parse(state),
            sort: SortKey::parse(sort),
        }
    }

    /// Returns the state filter.
    #[must_use]
    pub const fn filter(&self) -> StateFilter {
        self.filter
    }

    /// Returns the sort key.
    #[must_use]
    pub const fn sort(&self) -> SortKey {
        self.sort
    }

    /// Evaluates the query over a materialized collection.
    ///
    /// Storage adapters that can push the filter and sort down to their
    /// backend produce the same ordering this does.
    #[must_use]
    pub fn apply(&self, items: Vec<TaskItem>) -> Vec<TaskItem> {
        let mut selected: Vec<TaskItem> = items
            .into_iter()
            .filter(|item| self.filter.matches(item))
            .collect();
        selected.sort_by(|a, b| self.sort.compare(a, b));
        selected
    }
}
