//! Error types for task item domain parsing.

use thiserror::Error;

/// Error returned when a persisted state value is outside the defined range.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("task state value out of range: {0}")]
pub struct InvalidTaskState(pub i16);

/// Error returned while parsing a task state token from a request parameter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);

/// Error returned while parsing a sort key token from a request parameter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);
