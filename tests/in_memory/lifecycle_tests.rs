//! End-to-end lifecycle flows against the in-memory repository.

use super::helpers::{TestService, runtime, seed_task_items, service};
use rstest::rstest;
use std::io;
use taskdesk::task_item::{
    domain::{TaskItemDraft, TaskItemId, TaskState},
    services::{NoticeSeverity, TaskItemLifecycleError},
};
use tokio::runtime::Runtime;

#[rstest]
fn created_items_are_retrievable_by_assigned_id(
    runtime: io::Result<Runtime>,
    service: TestService,
) -> eyre::Result<()> {
    let rt = runtime?;
    let items = seed_task_items(&rt, &service)?;

    for item in &items {
        let fetched = rt.block_on(service.detail(item.id()))?;
        assert_eq!(&fetched, item);
    }
    Ok(())
}

#[rstest]
fn identifiers_are_allocated_sequentially(
    runtime: io::Result<Runtime>,
    service: TestService,
) -> eyre::Result<()> {
    let rt = runtime?;
    let items = seed_task_items(&rt, &service)?;

    let ids: Vec<i32> = items.iter().map(|item| item.id().into_inner()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    Ok(())
}

#[rstest]
fn detail_of_unknown_id_signals_not_found(
    runtime: io::Result<Runtime>,
    service: TestService,
) -> eyre::Result<()> {
    let rt = runtime?;

    let result = rt.block_on(service.detail(TaskItemId::new(404)));

    let Err(error) = result else {
        eyre::bail!("expected not found");
    };
    assert!(matches!(error, TaskItemLifecycleError::NotFound(_)));
    let notice = error.notice().ok_or_else(|| eyre::eyre!("missing notice"))?;
    assert_eq!(notice.severity(), NoticeSeverity::Danger);
    Ok(())
}

#[rstest]
fn update_round_trips_through_storage(
    runtime: io::Result<Runtime>,
    service: TestService,
) -> eyre::Result<()> {
    let rt = runtime?;
    let items = seed_task_items(&rt, &service)?;
    let first = items.first().ok_or_else(|| eyre::eyre!("missing seed"))?;

    let updated = rt.block_on(service.update(
        first.id(),
        TaskItemDraft::new("Buy oat milk", "Unsweetened")
            .with_state(TaskState::Completed.as_i16()),
    ))?;
    let (item, notice) = updated.into_parts();
    assert_eq!(notice.message(), "Task item was updated.");

    let fetched = rt.block_on(service.detail(first.id()))?;
    assert_eq!(fetched, item);
    assert_eq!(fetched.title(), "Buy oat milk");
    assert_eq!(fetched.state(), TaskState::Completed);
    assert_eq!(fetched.created_at(), first.created_at());
    Ok(())
}

#[rstest]
fn delete_removes_the_row_and_repeats_as_not_found(
    runtime: io::Result<Runtime>,
    service: TestService,
) -> eyre::Result<()> {
    let rt = runtime?;
    let items = seed_task_items(&rt, &service)?;
    let first = items.first().ok_or_else(|| eyre::eyre!("missing seed"))?;

    let notice = rt.block_on(service.delete(first.id()))?;
    assert_eq!(notice.severity(), NoticeSeverity::Success);

    let listing = rt.block_on(service.list(None, None))?;
    assert_eq!(listing.items().len(), items.len() - 1);

    let repeat = rt.block_on(service.delete(first.id()));
    assert!(matches!(
        repeat,
        Err(TaskItemLifecycleError::NotFound(_))
    ));
    Ok(())
}

#[rstest]
fn rejected_drafts_leave_the_collection_untouched(
    runtime: io::Result<Runtime>,
    service: TestService,
) -> eyre::Result<()> {
    let rt = runtime?;
    seed_task_items(&rt, &service)?;

    let result = rt.block_on(service.create(TaskItemDraft::new("   ", "")));
    assert!(matches!(
        result,
        Err(TaskItemLifecycleError::Validation(_))
    ));

    let listing = rt.block_on(service.list(None, None))?;
    assert_eq!(listing.items().len(), 3);
    Ok(())
}
