//! Taskdesk: a task item tracking core.
//!
//! This crate provides the query/filter/sort engine, the validation
//! pipeline, and the lifecycle orchestration for a single-entity task
//! tracker. Presentation and routing live outside the crate; persistence
//! is reached through a repository port with in-memory and `PostgreSQL`
//! adapters.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task_item`]: The tracked entity, its validation, queries, and
//!   lifecycle operations

pub mod task_item;
