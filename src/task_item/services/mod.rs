//! Application services for task item lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    Notice, NoticeSeverity, TaskItemLifecycleError, TaskItemLifecycleResult, TaskItemListing,
    TaskItemService, ValidationFailure, WithNotice,
};
