//! Dynamic occupancy tracking for moving threats.
//!
//! Each tick the tracker is handed the current threat positions.  It first
//! clears every tile it marked on the previous tick, then re-marks a
//! configurable neighborhood around each threat.  A tile occupied in tick N
//! by a since-moved threat is therefore always cleared before tick N+1's
//! marks land — dynamic occupancy never stains the grid permanently.
//!
//! Static walls are never claimed: a tile already occupied before marking is
//! skipped, so unmarking cannot erase terrain.

use log::trace;
use rustc_hash::FxHashSet;

use nav_core::{NavError, NavResult, TileCoord, WorldPoint};

use crate::TileGrid;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Shape of the marked neighborhood around a threat.  Both variants appear in
/// practice; which one fits depends on how the host's threats move.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RadiusShape {
    /// Tiles whose center lies within the radius (circular zone).
    #[default]
    Euclidean,
    /// Tiles within the radius on both axes (square zone).
    Chebyshev,
}

/// Occupancy tracker configuration.  Radii are in tile units.
///
/// `occupied_radius` controls which tiles are flagged as blocking;
/// `danger_radius` is the larger proximity band that triggers proactive
/// replanning without blocking any tile.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyConfig {
    pub occupied_radius: f32,
    pub danger_radius: f32,
    pub shape: RadiusShape,
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            occupied_radius: 1.5,
            danger_radius: 3.0,
            shape: RadiusShape::Euclidean,
        }
    }
}

impl OccupancyConfig {
    /// Radii must be finite, non-negative, and `occupied_radius <=
    /// danger_radius` — the danger band is a superset of the blocked zone.
    pub fn validate(&self) -> NavResult<()> {
        for (name, r) in [
            ("occupied_radius", self.occupied_radius),
            ("danger_radius", self.danger_radius),
        ] {
            if !(r.is_finite() && r >= 0.0) {
                return Err(NavError::Config(format!(
                    "{name} must be finite and non-negative, got {r}"
                )));
            }
        }
        if self.occupied_radius > self.danger_radius {
            return Err(NavError::Config(format!(
                "occupied_radius ({}) exceeds danger_radius ({})",
                self.occupied_radius, self.danger_radius
            )));
        }
        Ok(())
    }
}

// ── OccupancyTracker ──────────────────────────────────────────────────────────

/// Samples moving threats each tick and maintains their footprint on the
/// grid's occupancy flags.
pub struct OccupancyTracker {
    config: OccupancyConfig,
    /// Tiles this tracker marked on the most recent refresh.  Exactly these
    /// are cleared at the start of the next refresh.
    marked: FxHashSet<TileCoord>,
}

impl OccupancyTracker {
    pub fn new(config: OccupancyConfig) -> NavResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            marked: FxHashSet::default(),
        })
    }

    pub fn config(&self) -> &OccupancyConfig {
        &self.config
    }

    /// The tiles currently marked by this tracker.
    pub fn marked(&self) -> &FxHashSet<TileCoord> {
        &self.marked
    }

    /// Re-sample threat positions: unmark last tick's tiles, mark the
    /// `occupied_radius` neighborhood of each threat, and return the new
    /// marked set.
    ///
    /// Unmarking is idempotent and touches only tiles this tracker marked,
    /// so static walls survive and no tile stays stained once its threat
    /// has moved on.
    pub fn refresh(
        &mut self,
        grid: &mut TileGrid,
        threats: &[WorldPoint],
    ) -> &FxHashSet<TileCoord> {
        for &tile in &self.marked {
            // Marked tiles were in bounds when marked; the grid does not
            // resize, so this cannot fail.
            let _ = grid.set_occupied(tile, false);
        }
        self.marked.clear();

        for &threat in threats {
            let center = grid.closest_tile(threat);
            for tile in self.tiles_within(grid, center, self.config.occupied_radius) {
                if !grid.is_occupied(tile) {
                    let _ = grid.set_occupied(tile, true);
                    self.marked.insert(tile);
                }
            }
        }

        trace!(
            "occupancy refresh: {} threats, {} tiles marked",
            threats.len(),
            self.marked.len()
        );
        &self.marked
    }

    /// `true` if `point` lies within `danger_radius` of any threat.
    ///
    /// Reads nothing from and writes nothing to the grid's occupancy — this
    /// is the proactive-replan signal, not a blocking zone.
    pub fn in_danger_zone(
        &self,
        grid: &TileGrid,
        point: WorldPoint,
        threats: &[WorldPoint],
    ) -> bool {
        let radius = self.config.danger_radius * grid.tile_size();
        threats.iter().any(|&t| point.distance(t) <= radius)
    }

    /// In-bounds tiles within `radius` (tile units) of `center`, per the
    /// configured shape.
    fn tiles_within(
        &self,
        grid: &TileGrid,
        center: TileCoord,
        radius: f32,
    ) -> Vec<TileCoord> {
        let span = radius.ceil() as i32;
        let mut tiles = Vec::new();
        for dy in -span..=span {
            for dx in -span..=span {
                let Some(tile) = grid.try_tile(center.offset(dx, dy)) else {
                    continue;
                };
                let inside = match self.config.shape {
                    RadiusShape::Chebyshev => tile.chebyshev(center) as f32 <= radius,
                    RadiusShape::Euclidean => {
                        grid.world_pos(tile).distance(grid.world_pos(center))
                            <= radius * grid.tile_size()
                    }
                };
                if inside {
                    tiles.push(tile);
                }
            }
        }
        tiles
    }
}
