//! `nav-path` — shortest-path search over the tile grid.
//!
//! # Crate layout
//!
//! | Module    | Contents                                     |
//! |-----------|----------------------------------------------|
//! | [`path`]  | `Path` — immutable ordered tile sequence     |
//! | [`astar`] | `Pathfinder` trait, `AstarPathfinder`        |
//! | [`error`] | `PathError`, `PathResult<T>`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod astar;
pub mod error;
pub mod path;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use astar::{AstarPathfinder, Pathfinder};
pub use error::{PathError, PathResult};
pub use path::Path;
