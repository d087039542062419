//! Spatial sensing trait and a fixed-list implementation.
//!
//! The sensor is an injected capability: the host owns whatever spatial
//! index it already has (ECS query, scene graph, broadphase) and exposes it
//! through [`SpatialSensor`].  The navigation core only ever sees entity
//! kinds and world positions.

use nav_core::{EntityKind, WorldPoint};

/// Pluggable spatial query service.
///
/// Used by the occupancy tracker to find threats and by the agent controller
/// to discover collectible goals.
pub trait SpatialSensor {
    /// All entities within `radius` world units of `center`.
    ///
    /// Pass `f32::INFINITY` for an unbounded query.  Order is unspecified;
    /// callers that need determinism sort or reduce the result themselves.
    fn query(&self, center: WorldPoint, radius: f32) -> Vec<(EntityKind, WorldPoint)>;
}

/// A `Vec`-backed sensor for tests and simple hosts.
///
/// Entities are plain `(kind, position)` pairs; move a threat between ticks
/// by clearing and re-inserting, or with [`retain`](Self::retain).
#[derive(Default)]
pub struct FixedSensor {
    entities: Vec<(EntityKind, WorldPoint)>,
}

impl FixedSensor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: EntityKind, pos: WorldPoint) {
        self.entities.push((kind, pos));
    }

    /// Keep only the entities for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&(EntityKind, WorldPoint)) -> bool) {
        self.entities.retain(keep);
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl SpatialSensor for FixedSensor {
    fn query(&self, center: WorldPoint, radius: f32) -> Vec<(EntityKind, WorldPoint)> {
        self.entities
            .iter()
            .filter(|(_, pos)| center.distance(*pos) <= radius)
            .copied()
            .collect()
    }
}
