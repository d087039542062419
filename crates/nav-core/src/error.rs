//! Toolkit error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `NavError` via `From` impls, or keep them separate.  `nav-grid` uses
//! `NavError` directly (its failure modes are exactly bounds and
//! configuration); `nav-path` and `nav-tree` define their own.
//!
//! Every failure in the toolkit is local and recoverable — there is no
//! fatal-error path, and nothing here should ever abort a host tick.

use thiserror::Error;

use crate::TileCoord;

/// The top-level error type for `nav-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("tile {0} is outside the grid")]
    OutOfBounds(TileCoord),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nav-*` crates that use [`NavError`] directly.
pub type NavResult<T> = Result<T, NavError>;
