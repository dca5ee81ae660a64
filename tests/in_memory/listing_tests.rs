//! Filter and sort behaviour through the repository port.

use super::helpers::{TestService, runtime, seed_task_items, service};
use chrono::{Days, Utc};
use rstest::rstest;
use std::io;
use taskdesk::task_item::{
    adapters::memory::InMemoryTaskItemRepository,
    domain::{TaskItem, TaskItemDraft, TaskItemQuery},
    ports::TaskItemRepository,
};
use tokio::runtime::Runtime;

#[rstest]
fn listing_echoes_normalized_parameters(
    runtime: io::Result<Runtime>,
    service: TestService,
) -> eyre::Result<()> {
    let rt = runtime?;
    seed_task_items(&rt, &service)?;

    let listing = rt.block_on(service.list(Some("duedate"), Some("completed")))?;
    assert_eq!(listing.normalized_sort(), "DueDate");
    assert_eq!(listing.normalized_state(), Some("Completed"));

    let fallback = rt.block_on(service.list(Some("unknown"), Some("unknown")))?;
    assert_eq!(fallback.normalized_sort(), "CreatedAt");
    assert_eq!(fallback.normalized_state(), None);
    Ok(())
}

#[rstest]
fn state_filter_narrows_the_listing(
    runtime: io::Result<Runtime>,
    service: TestService,
) -> eyre::Result<()> {
    let rt = runtime?;
    seed_task_items(&rt, &service)?;

    let listing = rt.block_on(service.list(None, Some("Active")))?;

    assert_eq!(listing.items().len(), 1);
    let titles: Vec<&str> = listing.items().iter().map(TaskItem::title).collect();
    assert_eq!(titles, vec!["Archive taxes"]);
    Ok(())
}

#[rstest]
fn title_sort_orders_the_full_collection(
    runtime: io::Result<Runtime>,
    service: TestService,
) -> eyre::Result<()> {
    let rt = runtime?;
    seed_task_items(&rt, &service)?;

    let listing = rt.block_on(service.list(Some("Title"), None))?;

    let titles: Vec<&str> = listing.items().iter().map(TaskItem::title).collect();
    assert_eq!(titles, vec!["Archive taxes", "Buy milk", "Call plumber"]);
    Ok(())
}

#[rstest]
fn due_date_sort_places_undated_items_last(
    runtime: io::Result<Runtime>,
    service: TestService,
) -> eyre::Result<()> {
    let rt = runtime?;

    let near = Utc::now() + Days::new(7);
    let far = Utc::now() + Days::new(90);
    for draft in [
        TaskItemDraft::new("No deadline", "Whenever"),
        TaskItemDraft::new("Far deadline", "Later").with_due_date(far),
        TaskItemDraft::new("Near deadline", "Soon").with_due_date(near),
    ] {
        rt.block_on(service.create(draft))?;
    }

    let listing = rt.block_on(service.list(Some("DueDate"), None))?;

    let titles: Vec<&str> = listing.items().iter().map(TaskItem::title).collect();
    assert_eq!(titles, vec!["Near deadline", "Far deadline", "No deadline"]);
    Ok(())
}

#[rstest]
fn repository_listing_matches_reference_query_evaluation(
    runtime: io::Result<Runtime>,
) -> eyre::Result<()> {
    let rt = runtime?;
    let repository = InMemoryTaskItemRepository::new();
    let service_over_repo = TestService::new(
        std::sync::Arc::new(repository.clone()),
        std::sync::Arc::new(mockable::DefaultClock),
    );
    let all = seed_task_items(&rt, &service_over_repo)?;

    let query = TaskItemQuery::from_params(Some("Title"), Some("Active"));
    let listed = rt.block_on(repository.list(&query))?;

    assert_eq!(listed, query.apply(all));
    Ok(())
}
