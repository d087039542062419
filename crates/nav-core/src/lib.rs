//! `nav-core` — foundational types for the `navkit` grid-navigation toolkit.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                    |
//! |------------|---------------------------------------------|
//! | [`coords`] | `TileCoord`, `WorldPoint`, grid metrics     |
//! | [`time`]   | `Tick`                                      |
//! | [`entity`] | `EntityKind` sensor discriminator           |
//! | [`error`]  | `NavError`, `NavResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod coords;
pub mod entity;
pub mod error;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coords::{TileCoord, WorldPoint};
pub use entity::EntityKind;
pub use error::{NavError, NavResult};
pub use time::Tick;
