//! In-memory repository for task item lifecycle tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task_item::{
    domain::{NewTaskItem, TaskItem, TaskItemId, TaskItemQuery},
    ports::{TaskItemRepository, TaskItemRepositoryError, TaskItemRepositoryResult},
};

/// Thread-safe in-memory task item repository.
///
/// Identifiers are allocated sequentially from 1, mimicking an identity
/// column. Filtering and sorting are evaluated with the query's predicate
/// and comparator forms over a `BTreeMap` snapshot, so unfiltered results
/// start out in identifier order before the comparator runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskItemRepository {
    state: Arc<RwLock<InMemoryTaskItemState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskItemState {
    items: BTreeMap<i32, TaskItem>,
    next_id: i32,
}

impl InMemoryTaskItemRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskItemRepository for InMemoryTaskItemRepository {
    async fn insert(&self, item: NewTaskItem) -> TaskItemRepositoryResult<TaskItem> {
        let mut state = self.state.write().map_err(|err| {
            TaskItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.next_id += 1;
        let id = TaskItemId::new(state.next_id);
        let stored = item.into_task_item(id);
        state.items.insert(id.into_inner(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, item: &TaskItem) -> TaskItemRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let key = item.id().into_inner();
        if !state.items.contains_key(&key) {
            return Err(TaskItemRepositoryError::NotFound(item.id()));
        }
        state.items.insert(key, item.clone());
        Ok(())
    }

    async fn remove(&self, item: &TaskItem) -> TaskItemRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.items.remove(&item.id().into_inner()).is_none() {
            return Err(TaskItemRepositoryError::NotFound(item.id()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TaskItemId) -> TaskItemRepositoryResult<Option<TaskItem>> {
        let state = self.state.read().map_err(|err| {
            TaskItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.items.get(&id.into_inner()).cloned())
    }

    async fn list(&self, query: &TaskItemQuery) -> TaskItemRepositoryResult<Vec<TaskItem>> {
        let state = self.state.read().map_err(|err| {
            TaskItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let items: Vec<TaskItem> = state.items.values().cloned().collect();
        Ok(query.apply(items))
    }
}
