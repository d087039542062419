//! The `Path` type — the result of one search.

use nav_core::TileCoord;

/// An ordered tile sequence from start to goal, produced by one search and
/// immutable once returned.
///
/// The start tile is included; callers already standing on it skip it with
/// their cursor rather than mutating the path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    tiles: Vec<TileCoord>,
}

impl Path {
    /// Internal constructor; searches guarantee `tiles` is non-empty and
    /// 4-connected.
    pub(crate) fn from_tiles(tiles: Vec<TileCoord>) -> Self {
        debug_assert!(!tiles.is_empty());
        Self { tiles }
    }

    pub fn tiles(&self) -> &[TileCoord] {
        &self.tiles
    }

    /// Number of tiles, including the start tile.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tile at waypoint index `i`, if any.
    #[inline]
    pub fn get(&self, i: usize) -> Option<TileCoord> {
        self.tiles.get(i).copied()
    }

    /// The first tile (the search's start).
    pub fn first(&self) -> Option<TileCoord> {
        self.tiles.first().copied()
    }

    /// The last tile (the search's goal).
    pub fn goal(&self) -> Option<TileCoord> {
        self.tiles.last().copied()
    }

    pub fn contains(&self, coord: TileCoord) -> bool {
        self.tiles.contains(&coord)
    }
}
