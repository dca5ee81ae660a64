//! Domain-focused tests for task item types.

use crate::task_item::domain::{
    InvalidTaskState, NewTaskItem, ParseTaskStateError, PersistedTaskItemData, TaskItem,
    TaskItemContent, TaskItemDraft, TaskItemId, TaskState,
};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[case("new", TaskState::New)]
#[case("Active", TaskState::Active)]
#[case("COMPLETED", TaskState::Completed)]
#[case("  completed  ", TaskState::Completed)]
fn task_state_parses_tokens_case_insensitively(#[case] token: &str, #[case] expected: TaskState) {
    assert_eq!(TaskState::try_from(token), Ok(expected));
}

#[rstest]
fn task_state_rejects_unknown_token() {
    assert_eq!(
        TaskState::try_from("bogus"),
        Err(ParseTaskStateError("bogus".to_owned()))
    );
}

#[rstest]
#[case(0, TaskState::New)]
#[case(1, TaskState::Active)]
#[case(2, TaskState::Completed)]
fn task_state_round_trips_persisted_values(#[case] value: i16, #[case] expected: TaskState) {
    assert_eq!(TaskState::from_i16(value), Ok(expected));
    assert_eq!(expected.as_i16(), value);
}

#[rstest]
#[case(-1)]
#[case(3)]
#[case(i16::MAX)]
fn task_state_rejects_out_of_range_values(#[case] value: i16) {
    assert_eq!(TaskState::from_i16(value), Err(InvalidTaskState(value)));
}

#[rstest]
fn task_state_options_cover_every_state_in_order() {
    let options = TaskState::options();
    assert_eq!(options, vec![(0, "New"), (1, "Active"), (2, "Completed")]);
}

#[rstest]
fn draft_defaults_to_new_state_without_due_date() {
    let draft = TaskItemDraft::new("Buy milk", "2% milk");
    assert_eq!(draft.state(), TaskState::New.as_i16());
    assert_eq!(draft.due_date(), None);
}

#[rstest]
fn new_task_item_takes_creation_time_from_clock() {
    let clock = DefaultClock;
    let content = TaskItemContent::new(
        "Buy milk".to_owned(),
        "2% milk".to_owned(),
        TaskState::New,
        None,
    );

    let before = Utc::now();
    let item = NewTaskItem::new(content, &clock);
    let after = Utc::now();

    assert!(item.created_at() >= before && item.created_at() <= after);
}

#[rstest]
fn into_task_item_attaches_the_allocated_identifier() {
    let clock = DefaultClock;
    let content = TaskItemContent::new(
        "Buy milk".to_owned(),
        "2% milk".to_owned(),
        TaskState::Active,
        None,
    );
    let unpersisted = NewTaskItem::new(content, &clock);
    let created_at = unpersisted.created_at();

    let item = unpersisted.into_task_item(TaskItemId::new(7));

    assert_eq!(item.id(), TaskItemId::new(7));
    assert_eq!(item.title(), "Buy milk");
    assert_eq!(item.description(), "2% milk");
    assert_eq!(item.state(), TaskState::Active);
    assert_eq!(item.created_at(), created_at);
}

#[rstest]
fn apply_leaves_identifier_and_creation_time_untouched() {
    let created_at = Utc
        .with_ymd_and_hms(2026, 1, 15, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    let due = Utc
        .with_ymd_and_hms(2026, 6, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp");
    let mut item = TaskItem::from_persisted(PersistedTaskItemData {
        id: TaskItemId::new(3),
        title: "Buy milk".to_owned(),
        description: "2% milk".to_owned(),
        state: TaskState::New,
        created_at,
        due_date: None,
    });

    item.apply(TaskItemContent::new(
        "Buy oat milk".to_owned(),
        "Unsweetened".to_owned(),
        TaskState::Active,
        Some(due),
    ));

    assert_eq!(item.id(), TaskItemId::new(3));
    assert_eq!(item.created_at(), created_at);
    assert_eq!(item.title(), "Buy oat milk");
    assert_eq!(item.description(), "Unsweetened");
    assert_eq!(item.state(), TaskState::Active);
    assert_eq!(item.due_date(), Some(due));
}

#[rstest]
fn task_item_id_displays_its_integer_value() {
    assert_eq!(TaskItemId::new(42).to_string(), "42");
}
