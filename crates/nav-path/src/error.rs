//! Pathfinding error type.

use thiserror::Error;

use nav_core::TileCoord;

/// Errors produced by `nav-path`.
///
/// `NoPath` is recoverable by design: controllers respond by blocking the
/// goal and retrying later, never by aborting the tick.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("no path from {from} to {to}")]
    NoPath { from: TileCoord, to: TileCoord },
}

pub type PathResult<T> = Result<T, PathError>;
