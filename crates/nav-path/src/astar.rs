//! Pathfinding trait and the default A* implementation.
//!
//! # Pluggability
//!
//! Controllers call search via the [`Pathfinder`] trait, so applications can
//! swap in custom implementations (jump-point search, hierarchical A*,
//! weighted variants) without touching the rest of the toolkit.  The default
//! [`AstarPathfinder`] covers the 4-connected unit-cost case.
//!
//! # Determinism
//!
//! Open-set extraction uses a fixed, documented tie-break: lowest `f`, then
//! lowest `h`, then insertion order.  Combined with the fixed neighbor
//! expansion order in `TileCoord::NEIGHBORS_4`, two calls with identical
//! grid state and endpoints always return the identical path.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use nav_core::TileCoord;
use nav_grid::TileGrid;

use crate::{Path, PathError, PathResult};

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path search over a [`TileGrid`].
pub trait Pathfinder {
    /// Compute a path from `start` to `goal`, honoring the grid's occupancy
    /// flags plus the extra `avoid` set.
    ///
    /// Returns the full tile sequence including `start`; `start == goal`
    /// yields a single-tile path.  Stateless across calls: no search tree is
    /// reused between invocations.
    fn find_path(
        &self,
        grid: &TileGrid,
        start: TileCoord,
        goal: TileCoord,
        avoid: &FxHashSet<TileCoord>,
    ) -> PathResult<Path>;
}

// ── AstarPathfinder ───────────────────────────────────────────────────────────

/// Classic A* over the 4-connected grid: uniform edge cost 1, Manhattan
/// heuristic (admissible and consistent here, so results are optimal).
///
/// The open set is a binary heap keyed `(f, h, seq)` — O(V log V) overall —
/// and per-tile `g`/parent/closed state lives in dense arrays indexed by
/// `TileGrid::index_of`, allocated fresh per call and discarded after
/// reconstruction.
pub struct AstarPathfinder {
    /// Optional cap on node expansions per call, to bound worst-case
    /// per-tick latency on large grids.  Exhausting the budget reports
    /// [`PathError::NoPath`], which controllers treat like any other
    /// unreachable goal.
    max_expansions: Option<usize>,
}

impl AstarPathfinder {
    pub fn new() -> Self {
        Self { max_expansions: None }
    }

    /// Limit each call to at most `n` node expansions.
    pub fn with_max_expansions(n: usize) -> Self {
        Self { max_expansions: Some(n) }
    }
}

impl Default for AstarPathfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Pathfinder for AstarPathfinder {
    fn find_path(
        &self,
        grid: &TileGrid,
        start: TileCoord,
        goal: TileCoord,
        avoid: &FxHashSet<TileCoord>,
    ) -> PathResult<Path> {
        let no_path = PathError::NoPath { from: start, to: goal };

        let (Some(start), Some(goal)) = (grid.try_tile(start), grid.try_tile(goal)) else {
            return Err(no_path);
        };
        if start == goal {
            return Ok(Path::from_tiles(vec![start]));
        }
        // An occupied or avoided goal can never be entered; fail fast rather
        // than exhausting the open set.
        if grid.is_occupied(goal) || avoid.contains(&goal) {
            return Err(no_path);
        }

        let n = grid.tile_count();
        // g[v] = best known cost from start; UNREACHED until discovered.
        let mut g = vec![u32::MAX; n];
        // parent[v] = predecessor tile index; UNREACHED for the start tile.
        let mut parent = vec![UNREACHED; n];
        let mut closed = vec![false; n];

        let start_idx = grid.index_of(start);
        let goal_idx = grid.index_of(goal);
        g[start_idx] = 0;

        // Min-heap via Reverse.  Key order is the documented tie-break:
        // f, then h, then insertion sequence.
        let mut open: BinaryHeap<Reverse<(u32, u32, u32, u32)>> = BinaryHeap::new();
        let mut seq = 0u32;
        let h0 = start.manhattan(goal);
        open.push(Reverse((h0, h0, seq, start_idx as u32)));

        let mut expansions = 0usize;

        while let Some(Reverse((_f, _h, _s, idx))) = open.pop() {
            let idx = idx as usize;
            // Skip stale heap entries for already-finalized tiles.
            if closed[idx] {
                continue;
            }
            if idx == goal_idx {
                return Ok(reconstruct(grid, &parent, start_idx, goal_idx));
            }
            closed[idx] = true;

            expansions += 1;
            if self.max_expansions.is_some_and(|max| expansions > max) {
                break;
            }

            let tile = grid.coord_at(idx);
            for neighbor in grid.neighbors4(tile) {
                if grid.is_occupied(neighbor) || avoid.contains(&neighbor) {
                    continue;
                }
                let n_idx = grid.index_of(neighbor);
                if closed[n_idx] {
                    continue;
                }
                let tentative_g = g[idx] + 1;
                if tentative_g < g[n_idx] {
                    g[n_idx] = tentative_g;
                    parent[n_idx] = idx as u32;
                    let h = neighbor.manhattan(goal);
                    seq += 1;
                    open.push(Reverse((tentative_g + h, h, seq, n_idx as u32)));
                }
            }
        }

        Err(no_path)
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// Sentinel for "no predecessor recorded".
const UNREACHED: u32 = u32::MAX;

/// Walk parent links from `goal` back to `start` and reverse.
fn reconstruct(grid: &TileGrid, parent: &[u32], start: usize, goal: usize) -> Path {
    let mut tiles = Vec::new();
    let mut cur = goal;
    loop {
        tiles.push(grid.coord_at(cur));
        if cur == start {
            break;
        }
        cur = parent[cur] as usize;
    }
    tiles.reverse();
    Path::from_tiles(tiles)
}
