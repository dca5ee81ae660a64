//! `PostgreSQL` repository implementation for task item storage.
//!
//! Filtering and sorting are pushed down to SQL: the state filter becomes a
//! `WHERE` clause and the sort key an `ORDER BY`, so the collection is
//! never materialized unfiltered on the application side.

use super::{
    models::{NewTaskItemRow, TaskItemRow},
    schema::task_items,
};
use crate::task_item::{
    domain::{
        NewTaskItem, PersistedTaskItemData, SortKey, TaskItem, TaskItemId, TaskItemQuery,
        TaskState,
    },
    ports::{TaskItemRepository, TaskItemRepositoryError, TaskItemRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task item adapters.
pub type TaskItemPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task item repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskItemRepository {
    pool: TaskItemPgPool,
}

impl PostgresTaskItemRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskItemPgPool) -> Self {
        Self { pool }
    }

    /// Creates a repository with a fresh pool for the given database URL.
    ///
    /// # Errors
    ///
    /// Returns [`TaskItemRepositoryError::Persistence`] when the pool
    /// cannot be built.
    pub fn from_url(database_url: &str) -> TaskItemRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .build(manager)
            .map_err(TaskItemRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskItemRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskItemRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskItemRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskItemRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskItemRepository for PostgresTaskItemRepository {
    async fn insert(&self, item: NewTaskItem) -> TaskItemRepositoryResult<TaskItem> {
        let new_row = to_new_row(&item);
        let stored = self
            .run_blocking(move |connection| {
                let row = diesel::insert_into(task_items::table)
                    .values(&new_row)
                    .returning(TaskItemRow::as_returning())
                    .get_result::<TaskItemRow>(connection)
                    .map_err(TaskItemRepositoryError::persistence)?;
                row_to_item(row)
            })
            .await?;
        tracing::debug!(id = stored.id().into_inner(), "inserted task item");
        Ok(stored)
    }

    async fn update(&self, item: &TaskItem) -> TaskItemRepositoryResult<()> {
        let id = item.id();
        let title = item.title().to_owned();
        let description = item.description().to_owned();
        let state = item.state().as_i16();
        let due_date = item.due_date();

        self.run_blocking(move |connection| {
            let affected = diesel::update(task_items::table.find(id.into_inner()))
                .set((
                    task_items::title.eq(title),
                    task_items::description.eq(description),
                    task_items::state.eq(state),
                    task_items::due_date.eq(due_date),
                ))
                .execute(connection)
                .map_err(TaskItemRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskItemRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await?;
        tracing::debug!(id = id.into_inner(), "updated task item");
        Ok(())
    }

    async fn remove(&self, item: &TaskItem) -> TaskItemRepositoryResult<()> {
        let id = item.id();
        self.run_blocking(move |connection| {
            let affected = diesel::delete(task_items::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskItemRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskItemRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await?;
        tracing::debug!(id = id.into_inner(), "removed task item");
        Ok(())
    }

    async fn find_by_id(&self, id: TaskItemId) -> TaskItemRepositoryResult<Option<TaskItem>> {
        self.run_blocking(move |connection| {
            let row = task_items::table
                .find(id.into_inner())
                .select(TaskItemRow::as_select())
                .first::<TaskItemRow>(connection)
                .optional()
                .map_err(TaskItemRepositoryError::persistence)?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn list(&self, query: &TaskItemQuery) -> TaskItemRepositoryResult<Vec<TaskItem>> {
        let pushdown = *query;
        self.run_blocking(move |connection| {
            let mut statement = task_items::table
                .select(TaskItemRow::as_select())
                .into_boxed();

            if let Some(state) = pushdown.filter().state() {
                statement = statement.filter(task_items::state.eq(state.as_i16()));
            }
            statement = match pushdown.sort() {
                SortKey::CreatedAt => statement.order(task_items::created_at.desc()),
                SortKey::Title => statement.order(task_items::title.asc()),
                SortKey::DueDate => statement.order((
                    task_items::due_date.is_null().asc(),
                    task_items::due_date.asc(),
                )),
            };

            let rows = statement
                .load::<TaskItemRow>(connection)
                .map_err(TaskItemRepositoryError::persistence)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }
}

fn to_new_row(item: &NewTaskItem) -> NewTaskItemRow {
    NewTaskItemRow {
        title: item.title().to_owned(),
        description: item.description().to_owned(),
        state: item.state().as_i16(),
        created_at: item.created_at(),
        due_date: item.due_date(),
    }
}

fn row_to_item(row: TaskItemRow) -> TaskItemRepositoryResult<TaskItem> {
    let TaskItemRow {
        id,
        title,
        description,
        state: persisted_state,
        created_at,
        due_date,
    } = row;

    let state =
        TaskState::from_i16(persisted_state).map_err(TaskItemRepositoryError::persistence)?;

    Ok(TaskItem::from_persisted(PersistedTaskItemData {
        id: TaskItemId::new(id),
        title,
        description,
        state,
        created_at,
        due_date,
    }))
}
