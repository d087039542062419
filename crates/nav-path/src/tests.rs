//! Unit tests for nav-path.

#[cfg(test)]
mod helpers {
    use nav_core::TileCoord;
    use nav_grid::{TileGrid, TileGridBuilder};
    use rustc_hash::FxHashSet;

    use crate::{AstarPathfinder, Path, PathResult, Pathfinder};

    pub fn open_grid(w: u32, h: u32) -> TileGrid {
        TileGridBuilder::new(w, h).build().unwrap()
    }

    pub fn find(grid: &TileGrid, start: (i32, i32), goal: (i32, i32)) -> PathResult<Path> {
        AstarPathfinder::new().find_path(
            grid,
            TileCoord::new(start.0, start.1),
            TileCoord::new(goal.0, goal.1),
            &FxHashSet::default(),
        )
    }

    /// Every consecutive pair of tiles must be 4-adjacent.
    pub fn assert_connected(path: &Path) {
        for pair in path.tiles().windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1, "path not 4-connected");
        }
    }
}

// ── Optimality on open grids ──────────────────────────────────────────────────

#[cfg(test)]
mod optimality {
    use nav_core::TileCoord;

    use super::helpers::{assert_connected, find, open_grid};

    #[test]
    fn open_grid_paths_have_manhattan_length() {
        let grid = open_grid(7, 6);
        for &(a, b) in &[
            ((0, 0), (6, 5)),
            ((3, 2), (3, 2)),
            ((6, 0), (0, 5)),
            ((2, 4), (5, 1)),
        ] {
            let path = find(&grid, a, b).unwrap();
            let start = TileCoord::new(a.0, a.1);
            let goal = TileCoord::new(b.0, b.1);
            assert_eq!(path.len() as u32, start.manhattan(goal) + 1);
            assert_eq!(path.first(), Some(start));
            assert_eq!(path.goal(), Some(goal));
            assert_connected(&path);
        }
    }

    #[test]
    fn five_by_five_diagonal() {
        let grid = open_grid(5, 5);
        let path = find(&grid, (0, 0), (4, 4)).unwrap();
        assert_eq!(path.len(), 9);
        assert_connected(&path);

        // Coordinates approach the goal monotonically: Manhattan distance to
        // (4,4) strictly decreases along the path.
        let goal = TileCoord::new(4, 4);
        for pair in path.tiles().windows(2) {
            assert!(pair[1].manhattan(goal) < pair[0].manhattan(goal));
        }
    }

    #[test]
    fn start_equals_goal_is_single_tile() {
        let grid = open_grid(4, 4);
        let path = find(&grid, (2, 2), (2, 2)).unwrap();
        assert_eq!(path.tiles(), &[TileCoord::new(2, 2)]);
    }
}

// ── Occupancy & avoid set ─────────────────────────────────────────────────────

#[cfg(test)]
mod blocking {
    use nav_core::TileCoord;
    use nav_grid::TileGridBuilder;
    use rustc_hash::FxHashSet;

    use crate::{AstarPathfinder, PathError, Pathfinder};

    use super::helpers::{assert_connected, find, open_grid};

    #[test]
    fn path_never_crosses_occupied_tiles() {
        // A wall with one gap; every returned tile must be free.
        let mut builder = TileGridBuilder::new(7, 7);
        for y in 0..7 {
            if y != 3 {
                builder = builder.wall(TileCoord::new(3, y));
            }
        }
        let grid = builder.build().unwrap();
        let path = find(&grid, (0, 0), (6, 6)).unwrap();
        for &tile in path.tiles() {
            assert!(!grid.is_occupied(tile));
        }
        assert_connected(&path);
    }

    #[test]
    fn single_blocker_forces_two_tile_detour() {
        // Straight 1-wide corridor row: blocking the middle tile of a 1-high
        // grid's row is a dead end, so use a 3-high grid and compare lengths.
        let open = open_grid(5, 3);
        let unobstructed = find(&open, (0, 1), (4, 1)).unwrap();
        assert_eq!(unobstructed.len(), 5);

        let blocked = TileGridBuilder::new(5, 3)
            .wall(TileCoord::new(2, 1))
            .build()
            .unwrap();
        let detour = find(&blocked, (0, 1), (4, 1)).unwrap();
        // Step off the row and back on: exactly 2 tiles longer.
        assert_eq!(detour.len(), unobstructed.len() + 2);
        assert!(!detour.contains(TileCoord::new(2, 1)));
    }

    #[test]
    fn occupied_goal_has_no_path() {
        let grid = TileGridBuilder::new(4, 4)
            .wall(TileCoord::new(3, 3))
            .build()
            .unwrap();
        let result = find(&grid, (0, 0), (3, 3));
        assert!(matches!(result, Err(PathError::NoPath { .. })));
    }

    #[test]
    fn ringed_goal_has_no_path() {
        let goal = TileCoord::new(3, 3);
        let mut builder = TileGridBuilder::new(7, 7);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) != (0, 0) {
                    builder = builder.wall(goal.offset(dx, dy));
                }
            }
        }
        let grid = builder.build().unwrap();
        assert!(find(&grid, (0, 0), (3, 3)).is_err());
    }

    #[test]
    fn out_of_bounds_endpoints_have_no_path() {
        let grid = open_grid(3, 3);
        assert!(find(&grid, (-1, 0), (2, 2)).is_err());
        assert!(find(&grid, (0, 0), (9, 9)).is_err());
    }

    #[test]
    fn occupied_start_can_still_escape() {
        // An agent standing inside a freshly marked zone must path out of it.
        let grid = TileGridBuilder::new(4, 1)
            .wall(TileCoord::new(0, 0))
            .build()
            .unwrap();
        let path = find(&grid, (0, 0), (3, 0)).unwrap();
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn avoid_set_excludes_tiles() {
        let grid = open_grid(5, 3);
        let mut avoid = FxHashSet::default();
        avoid.insert(TileCoord::new(2, 1));

        let path = AstarPathfinder::new()
            .find_path(&grid, TileCoord::new(0, 1), TileCoord::new(4, 1), &avoid)
            .unwrap();
        assert!(!path.contains(TileCoord::new(2, 1)));
        assert_eq!(path.len(), 7); // detour around the avoided tile
    }

    #[test]
    fn avoided_goal_has_no_path() {
        let grid = open_grid(3, 3);
        let mut avoid = FxHashSet::default();
        avoid.insert(TileCoord::new(2, 2));
        let result = AstarPathfinder::new().find_path(
            &grid,
            TileCoord::new(0, 0),
            TileCoord::new(2, 2),
            &avoid,
        );
        assert!(result.is_err());
    }
}

// ── Determinism & budget ──────────────────────────────────────────────────────

#[cfg(test)]
mod behavior {
    use crate::AstarPathfinder;

    use super::helpers::{find, open_grid};

    #[test]
    fn identical_inputs_identical_paths() {
        let grid = open_grid(9, 9);
        let a = find(&grid, (0, 0), (8, 8)).unwrap();
        let b = find(&grid, (0, 0), (8, 8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn expansion_budget_bounds_search() {
        use nav_core::TileCoord;
        use rustc_hash::FxHashSet;

        use crate::Pathfinder;

        let grid = open_grid(30, 30);
        let tight = AstarPathfinder::with_max_expansions(5);
        let result = tight.find_path(
            &grid,
            TileCoord::new(0, 0),
            TileCoord::new(29, 29),
            &FxHashSet::default(),
        );
        assert!(result.is_err(), "budget exhaustion reports no path");

        // A nearby goal fits comfortably in the same budget.
        let short = tight.find_path(
            &grid,
            TileCoord::new(0, 0),
            TileCoord::new(1, 0),
            &FxHashSet::default(),
        );
        assert!(short.is_ok());
    }
}
