//! Tile grid representation and builder.
//!
//! # Data layout
//!
//! Occupancy is a dense row-major `Vec<bool>`: the flag for tile `(x, y)` is
//! at index `y * width + x`.  A `TileCoord` is the identity of a cell — the
//! grid never duplicates tiles, it only answers questions about coordinates.
//!
//! # Tile↔world mapping
//!
//! Each tile maps bijectively to its cell center:
//!
//! ```text
//! world = origin + (coord + 0.5) * tile_size
//! ```
//!
//! [`TileGrid::closest_tile`] inverts the mapping per axis, so nearest-tile
//! queries are O(1) arithmetic — no spatial index needed on a uniform grid.

use nav_core::{NavError, NavResult, TileCoord, WorldPoint};

// ── TileGrid ──────────────────────────────────────────────────────────────────

/// Finite rectangular tile map: per-tile occupancy flags plus the tile↔world
/// coordinate mapping.  No search logic lives here.
///
/// Construct via [`TileGridBuilder`].
pub struct TileGrid {
    width: u32,
    height: u32,
    origin: WorldPoint,
    tile_size: f32,
    /// Row-major occupancy flags, `height * width` entries.
    occupied: Vec<bool>,
}

impl TileGrid {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of tiles (`width * height`).  Never zero — the builder
    /// rejects empty grids.
    pub fn tile_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    #[inline]
    pub fn in_bounds(&self, coord: TileCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    // ── Tile addressing ───────────────────────────────────────────────────

    /// `Some(coord)` if `coord` is inside the grid, `None` otherwise.
    /// Absence is the contract for out-of-bounds — never an error or panic.
    #[inline]
    pub fn try_tile(&self, coord: TileCoord) -> Option<TileCoord> {
        self.in_bounds(coord).then_some(coord)
    }

    /// Dense row-major index of an in-bounds tile, for per-tile scratch
    /// arrays in search code.
    ///
    /// # Precondition
    /// `coord` must be in bounds (checked in debug builds).
    #[inline]
    pub fn index_of(&self, coord: TileCoord) -> usize {
        debug_assert!(self.in_bounds(coord));
        coord.y as usize * self.width as usize + coord.x as usize
    }

    /// Inverse of [`index_of`](Self::index_of).
    ///
    /// # Precondition
    /// `index < tile_count()` (checked in debug builds).
    #[inline]
    pub fn coord_at(&self, index: usize) -> TileCoord {
        debug_assert!(index < self.tile_count());
        TileCoord::new(
            (index % self.width as usize) as i32,
            (index / self.width as usize) as i32,
        )
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// `true` if `coord` blocks movement.  Out-of-bounds coordinates count as
    /// occupied, so callers that treat the boundary as walls need no special
    /// case.
    #[inline]
    pub fn is_occupied(&self, coord: TileCoord) -> bool {
        match self.try_tile(coord) {
            Some(c) => self.occupied[self.index_of(c)],
            None => true,
        }
    }

    /// Set the occupancy flag of an in-bounds tile.
    ///
    /// This is the single authority for path-blocking: the pathfinder and
    /// the occupancy tracker both read the flag set here.
    pub fn set_occupied(&mut self, coord: TileCoord, occupied: bool) -> NavResult<()> {
        let c = self.try_tile(coord).ok_or(NavError::OutOfBounds(coord))?;
        let idx = self.index_of(c);
        self.occupied[idx] = occupied;
        Ok(())
    }

    // ── Tile↔world mapping ────────────────────────────────────────────────

    /// World-space center of a tile's cell.  Deterministic and bijective:
    /// one tile ↔ one cell center.
    #[inline]
    pub fn world_pos(&self, coord: TileCoord) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (coord.x as f32 + 0.5) * self.tile_size,
            self.origin.y + (coord.y as f32 + 0.5) * self.tile_size,
        )
    }

    /// Nearest in-bounds tile to a world point, by Euclidean distance to cell
    /// centers.  Ties break to the lowest coordinate sum; points outside the
    /// grid clamp to the nearest edge tile.
    pub fn closest_tile(&self, point: WorldPoint) -> TileCoord {
        TileCoord::new(
            self.closest_axis(point.x - self.origin.x, self.width),
            self.closest_axis(point.y - self.origin.y, self.height),
        )
    }

    /// Nearest cell index along one axis.  Distance to a cell center
    /// decomposes per axis, so picking the per-axis nearest (lower cell on an
    /// exact tie) yields the global nearest with the lowest coordinate sum.
    fn closest_axis(&self, offset: f32, extent: u32) -> i32 {
        let frac = offset / self.tile_size;
        let lo = (frac - 0.5).floor();
        let hi = lo + 1.0;
        // Centers sit at lo + 0.5 and hi + 0.5; prefer lo on a tie.
        let pick = if (frac - (lo + 0.5)).abs() <= (frac - (hi + 0.5)).abs() {
            lo
        } else {
            hi
        };
        (pick.max(0.0) as i64).min(extent as i64 - 1) as i32
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// In-bounds cardinal neighbors of `coord`, in the fixed
    /// [`TileCoord::NEIGHBORS_4`] order.  No heap allocation.
    pub fn neighbors4(&self, coord: TileCoord) -> impl Iterator<Item = TileCoord> + '_ {
        TileCoord::NEIGHBORS_4
            .iter()
            .filter_map(move |&(dx, dy)| self.try_tile(coord.offset(dx, dy)))
    }
}

// ── TileGridBuilder ───────────────────────────────────────────────────────────

/// Construct a [`TileGrid`] from bootstrap data: dimensions, the tile↔world
/// mapping, and an initial occupancy bitmap (static walls).
///
/// # Example
///
/// ```
/// use nav_core::TileCoord;
/// use nav_grid::TileGridBuilder;
///
/// let grid = TileGridBuilder::new(8, 8)
///     .tile_size(1.0)
///     .wall(TileCoord::new(3, 3))
///     .build()
///     .unwrap();
/// assert!(grid.is_occupied(TileCoord::new(3, 3)));
/// assert!(!grid.is_occupied(TileCoord::new(0, 0)));
/// ```
pub struct TileGridBuilder {
    width: u32,
    height: u32,
    origin: WorldPoint,
    tile_size: f32,
    bitmap: Option<Vec<bool>>,
    walls: Vec<TileCoord>,
}

impl TileGridBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            origin: WorldPoint::new(0.0, 0.0),
            tile_size: 1.0,
            bitmap: None,
            walls: Vec::new(),
        }
    }

    /// World position of the grid's `(0, 0)` cell corner.  Default `(0, 0)`.
    pub fn origin(mut self, origin: WorldPoint) -> Self {
        self.origin = origin;
        self
    }

    /// Edge length of one tile in world units.  Default `1.0`.
    pub fn tile_size(mut self, size: f32) -> Self {
        self.tile_size = size;
        self
    }

    /// Initial occupancy bitmap, row-major, length `width * height`.
    /// Validated in [`build`](Self::build).
    pub fn occupancy_bitmap(mut self, bitmap: &[bool]) -> Self {
        self.bitmap = Some(bitmap.to_vec());
        self
    }

    /// Mark a single tile as a static wall (applied after the bitmap).
    pub fn wall(mut self, coord: TileCoord) -> Self {
        self.walls.push(coord);
        self
    }

    /// Validate the bootstrap data and produce a [`TileGrid`].
    pub fn build(self) -> NavResult<TileGrid> {
        if self.width == 0 || self.height == 0 {
            return Err(NavError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(NavError::Config(format!(
                "tile size must be finite and positive, got {}",
                self.tile_size
            )));
        }

        let count = self.width as usize * self.height as usize;
        let occupied = match self.bitmap {
            Some(b) if b.len() != count => {
                return Err(NavError::Config(format!(
                    "occupancy bitmap has {} entries, grid has {} tiles",
                    b.len(),
                    count
                )));
            }
            Some(b) => b,
            None => vec![false; count],
        };

        let mut grid = TileGrid {
            width: self.width,
            height: self.height,
            origin: self.origin,
            tile_size: self.tile_size,
            occupied,
        };
        for wall in self.walls {
            grid.set_occupied(wall, true)?;
        }
        Ok(grid)
    }
}
