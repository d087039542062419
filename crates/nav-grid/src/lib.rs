//! `nav-grid` — tile map, dynamic occupancy, and spatial sensing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`grid`]      | `TileGrid` (occupancy + tile↔world mapping), `TileGridBuilder` |
//! | [`occupancy`] | `OccupancyTracker`, `OccupancyConfig`, `RadiusShape`    |
//! | [`sensor`]    | `SpatialSensor` trait, `FixedSensor`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |
//!
//! # Ordering contract
//!
//! The grid's occupancy flags are shared mutable state: written by
//! [`OccupancyTracker::refresh`] and read by the pathfinder within the same
//! tick.  The toolkit is single-threaded and tick-driven; within one tick the
//! tracker must refresh **before** any path query, and callers must not
//! assume occupancy is stable across ticks.

pub mod grid;
pub mod occupancy;
pub mod sensor;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use grid::{TileGrid, TileGridBuilder};
pub use occupancy::{OccupancyConfig, OccupancyTracker, RadiusShape};
pub use sensor::{FixedSensor, SpatialSensor};
