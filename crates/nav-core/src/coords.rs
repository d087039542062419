//! Tile and world coordinate types.
//!
//! `TileCoord` is the identity of a grid cell: two tiles are the same tile
//! exactly when their coordinates are equal.  `WorldPoint` is a continuous
//! position in the host's 2-D world space; the tile↔world mapping itself
//! (cell size, origin) lives in `nav-grid`, not here.

use std::fmt;

// ── TileCoord ─────────────────────────────────────────────────────────────────

/// Integer coordinates of one grid cell.
///
/// `Copy + Ord + Hash` so tiles can be used as map keys and sorted collection
/// elements without ceremony.  The derived `Ord` (x-major, then y) also serves
/// as a deterministic tie-break key wherever two tiles compare equal on some
/// primary metric.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    /// The four cardinal neighbor offsets, in fixed expansion order
    /// (+x, -x, +y, -y).  Search code iterates this constant so neighbor
    /// order — and therefore tie-breaking — is identical on every call.
    pub const NEIGHBORS_4: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The tile `(x + dx, y + dy)`.  No bounds information here; callers
    /// validate against a grid.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Manhattan distance `|dx| + |dy|` — the admissible heuristic for
    /// unit-cost 4-connected grids.
    #[inline]
    pub fn manhattan(self, other: TileCoord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Chebyshev distance `max(|dx|, |dy|)` — square-shaped radii.
    #[inline]
    pub fn chebyshev(self, other: TileCoord) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// `x + y`, widened to avoid overflow.  Used as the documented tie-break
    /// ("lowest coordinate sum") for nearest-tile queries.
    #[inline]
    pub fn coord_sum(self) -> i64 {
        self.x as i64 + self.y as i64
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── WorldPoint ────────────────────────────────────────────────────────────────

/// A continuous position in the host's world space, stored as single-precision
/// floats.  Grid-scale navigation never needs more than f32 precision, and it
/// halves memory in threat/entity lists versus f64.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: WorldPoint) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Squared Euclidean distance — cheaper than [`distance`](Self::distance)
    /// for comparisons and nearest-of queries.
    #[inline]
    pub fn distance_sq(self, other: WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
