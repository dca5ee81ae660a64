//! Task item tracking: query/filter/sort engine, validation, and lifecycle.
//!
//! The module implements the single managed entity of the crate — a task
//! item with a title, description, lifecycle state, and optional due date —
//! and the five operations over it (list, detail, create, update, delete).
//! Validation gates every write and the list operation normalizes its
//! filter and sort parameters instead of failing. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Field validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
