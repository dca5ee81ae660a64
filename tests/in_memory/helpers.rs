//! Shared test helpers for in-memory repository integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use taskdesk::task_item::{
    adapters::memory::InMemoryTaskItemRepository,
    domain::{TaskItem, TaskItemDraft, TaskState},
    services::TaskItemService,
};
use tokio::runtime::Runtime;

/// Service wired to a fresh in-memory repository.
pub type TestService = TaskItemService<InMemoryTaskItemRepository, DefaultClock>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a service over a fresh in-memory repository for each test.
#[fixture]
pub fn service() -> TestService {
    TaskItemService::new(
        Arc::new(InMemoryTaskItemRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Seeds a small mixed-state collection and returns the stored items.
///
/// # Errors
///
/// Returns an error if any create operation fails.
pub fn seed_task_items(rt: &Runtime, service: &TestService) -> eyre::Result<Vec<TaskItem>> {
    let drafts = vec![
        TaskItemDraft::new("Buy milk", "2% milk"),
        TaskItemDraft::new("Archive taxes", "Year 2025").with_state(TaskState::Active.as_i16()),
        TaskItemDraft::new("Call plumber", "Kitchen sink")
            .with_state(TaskState::Completed.as_i16()),
    ];

    let mut items = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let created = rt.block_on(service.create(draft))?;
        let (item, _) = created.into_parts();
        items.push(item);
    }
    Ok(items)
}
