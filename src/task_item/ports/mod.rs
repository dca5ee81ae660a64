//! Port contracts for task item persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task item
//! services.

pub mod repository;

pub use repository::{TaskItemRepository, TaskItemRepositoryError, TaskItemRepositoryResult};
