//! Behavior-tree error type.

use thiserror::Error;

use crate::blackboard::ValueKind;

/// Errors produced by `nav-tree` — all from typed blackboard access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("blackboard key {0} not set")]
    KeyMissing(String),

    #[error("blackboard value is {found}, expected {expected}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },
}

pub type TreeResult<T> = Result<T, TreeError>;
