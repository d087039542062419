//! Unit and scenario tests for nav-agent.

#[cfg(test)]
mod helpers {
    use nav_core::{Tick, TileCoord};
    use nav_grid::{FixedSensor, OccupancyConfig, TileGrid, TileGridBuilder};
    use nav_path::{AstarPathfinder, Pathfinder};

    use crate::{AgentConfig, AgentController, AgentObserver};

    /// Observer that records every callback for assertions.
    #[derive(Default)]
    pub struct Recorder {
        pub replans: Vec<(Tick, TileCoord)>,
        pub blocked: Vec<(Tick, TileCoord)>,
        pub collected: Vec<(Tick, TileCoord)>,
        pub retries: Vec<Tick>,
        pub give_ups: Vec<TileCoord>,
    }

    impl AgentObserver for Recorder {
        fn on_replan(&mut self, now: Tick, _from: TileCoord, goal: TileCoord) {
            self.replans.push((now, goal));
        }
        fn on_goal_blocked(&mut self, now: Tick, goal: TileCoord) {
            self.blocked.push((now, goal));
        }
        fn on_goal_collected(&mut self, now: Tick, goal: TileCoord) {
            self.collected.push((now, goal));
        }
        fn on_retry(&mut self, now: Tick) {
            self.retries.push(now);
        }
        fn on_give_up(&mut self, _now: Tick, goal: TileCoord) {
            self.give_ups.push(goal);
        }
    }

    pub fn open_grid(w: u32, h: u32) -> TileGrid {
        TileGridBuilder::new(w, h).build().unwrap()
    }

    pub fn controller(
        config: AgentConfig,
        start: (i32, i32),
    ) -> AgentController<AstarPathfinder> {
        AgentController::new(
            config,
            OccupancyConfig::default(),
            AstarPathfinder::new(),
            TileCoord::new(start.0, start.1),
        )
        .unwrap()
    }

    /// Run the host loop: tick, then move one tile toward the next
    /// waypoint.  Returns the tiles visited, in order, starting after
    /// `from_tick`.
    pub fn drive<P: Pathfinder>(
        ctrl: &mut AgentController<P>,
        grid: &mut TileGrid,
        sensor: &FixedSensor,
        rec: &mut Recorder,
        ticks: std::ops::Range<u64>,
    ) -> Vec<TileCoord> {
        let mut visited = Vec::new();
        for t in ticks {
            ctrl.tick(Tick(t), grid, sensor, rec);
            if let Some(next) = ctrl.next_waypoint() {
                ctrl.report_tile_reached(grid, next, rec);
                visited.push(next);
            }
            if ctrl.is_finished() {
                break;
            }
        }
        visited
    }

    pub fn tile(x: i32, y: i32) -> TileCoord {
        TileCoord::new(x, y)
    }
}

// ── Config validation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use crate::{AgentConfig, AgentError};

    #[test]
    fn default_config_is_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_retry_interval_is_rejected() {
        let config = AgentConfig { retry_interval_ticks: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(AgentError::Config(_))));
    }

    #[test]
    fn zero_retry_budget_is_rejected() {
        let config = AgentConfig { max_retry_rounds: Some(0), ..Default::default() };
        assert!(matches!(config.validate(), Err(AgentError::Config(_))));
    }

    #[test]
    fn negative_sense_radius_is_rejected() {
        let config = AgentConfig { sense_radius: -1.0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}

// ── Goal pursuit ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod pursuit {
    use nav_core::Tick;
    use nav_grid::FixedSensor;
    use nav_tree::NodeState;

    use crate::{AgentConfig, GoalPolicy};

    use super::helpers::{controller, drive, open_grid, tile, Recorder};

    #[test]
    fn idle_controller_reports_success() {
        let mut grid = open_grid(3, 3);
        let sensor = FixedSensor::new();
        let mut rec = Recorder::default();
        let mut ctrl = controller(AgentConfig::default(), (1, 1));

        let state = ctrl.tick(Tick::ZERO, &mut grid, &sensor, &mut rec);
        assert_eq!(state, NodeState::Success);
        assert!(ctrl.is_finished());
    }

    #[test]
    fn collects_goal_then_heads_for_terminal() {
        let mut grid = open_grid(5, 5);
        let sensor = FixedSensor::new();
        let mut rec = Recorder::default();
        let mut ctrl = controller(AgentConfig::default(), (0, 0));
        ctrl.set_goals(vec![tile(2, 2)], Some(tile(4, 4)));

        drive(&mut ctrl, &mut grid, &sensor, &mut rec, 0..20);

        assert!(ctrl.is_finished());
        assert_eq!(ctrl.position(), tile(4, 4));
        assert_eq!(rec.collected.len(), 1);
        assert_eq!(rec.collected[0].1, tile(2, 2));
        // 4 moves to the goal, 4 to the exit, one move per tick.
        assert!(rec.collected[0].0 <= Tick(4));
    }

    #[test]
    fn nearest_policy_collects_closest_first() {
        let mut grid = open_grid(6, 3);
        let sensor = FixedSensor::new();
        let mut rec = Recorder::default();
        let mut ctrl = controller(AgentConfig::default(), (0, 0));
        ctrl.set_goals(vec![tile(5, 0), tile(1, 0)], None);

        drive(&mut ctrl, &mut grid, &sensor, &mut rec, 0..20);

        let order: Vec<_> = rec.collected.iter().map(|(_, g)| *g).collect();
        assert_eq!(order, [tile(1, 0), tile(5, 0)]);
    }

    #[test]
    fn fixed_order_policy_ignores_distance() {
        let mut grid = open_grid(6, 3);
        let sensor = FixedSensor::new();
        let mut rec = Recorder::default();
        let config = AgentConfig { goal_policy: GoalPolicy::FixedOrder, ..Default::default() };
        let mut ctrl = controller(config, (0, 0));
        ctrl.set_goals(vec![tile(5, 0), tile(1, 0)], None);

        drive(&mut ctrl, &mut grid, &sensor, &mut rec, 0..30);

        let order: Vec<_> = rec.collected.iter().map(|(_, g)| *g).collect();
        assert_eq!(order, [tile(5, 0), tile(1, 0)]);
    }

    #[test]
    fn collection_triggers_immediate_replan() {
        let mut grid = open_grid(5, 3);
        let sensor = FixedSensor::new();
        let mut rec = Recorder::default();
        let mut ctrl = controller(AgentConfig::default(), (0, 0));
        ctrl.set_goals(vec![tile(2, 0), tile(4, 0)], None);

        drive(&mut ctrl, &mut grid, &sensor, &mut rec, 0..20);

        // The replan toward (4,0) carries the same tick as the collection
        // of (2,0): it happened inside report_tile_reached, not on the
        // following tick.
        let (collect_tick, first_goal) = rec.collected[0];
        assert_eq!(first_goal, tile(2, 0));
        assert!(
            rec.replans.contains(&(collect_tick, tile(4, 0))),
            "expected an eager replan toward the next goal at {collect_tick}"
        );
    }

    #[test]
    fn reaching_a_goal_tile_collects_it() {
        let grid = open_grid(3, 3);
        let mut rec = Recorder::default();
        let mut ctrl = controller(AgentConfig::default(), (0, 0));
        ctrl.set_goals(vec![tile(1, 0)], None);

        ctrl.report_tile_reached(&grid, tile(1, 0), &mut rec);
        assert!(ctrl.remaining_goals().is_empty());
        assert!(ctrl.is_finished());
    }

    #[test]
    fn discovered_goals_come_from_the_sensor() {
        use nav_core::{EntityKind, WorldPoint};

        let mut grid = open_grid(5, 5);
        let mut sensor = FixedSensor::new();
        sensor.insert(EntityKind::Pickup, WorldPoint { x: 3.5, y: 0.5 });
        sensor.insert(EntityKind::Pickup, WorldPoint { x: 0.5, y: 3.5 });
        sensor.insert(EntityKind::Exit, WorldPoint { x: 4.5, y: 4.5 });

        let mut rec = Recorder::default();
        let mut ctrl = controller(AgentConfig::default(), (0, 0));
        ctrl.discover_goals(&grid, &sensor);

        assert_eq!(ctrl.remaining_goals(), [tile(0, 3), tile(3, 0)]);
        assert_eq!(ctrl.terminal_goal(), Some(tile(4, 4)));

        drive(&mut ctrl, &mut grid, &sensor, &mut rec, 0..40);
        assert!(ctrl.is_finished());
        assert_eq!(ctrl.position(), tile(4, 4));
    }
}

// ── Blocked goals, retry, give-up ─────────────────────────────────────────────

#[cfg(test)]
mod retry {
    use nav_core::TileCoord;
    use nav_grid::{FixedSensor, TileGridBuilder};

    use crate::AgentConfig;

    use super::helpers::{controller, drive, tile, Recorder};

    /// Walls fully enclosing `center`.
    fn ring(center: TileCoord) -> impl Iterator<Item = TileCoord> {
        (-1..=1).flat_map(move |dy| {
            (-1..=1).filter_map(move |dx| {
                ((dx, dy) != (0, 0)).then(|| center.offset(dx, dy))
            })
        })
    }

    #[test]
    fn sealed_goal_blocks_then_succeeds_once_opened() {
        let sealed = tile(7, 7);
        let mut builder = TileGridBuilder::new(9, 9);
        for wall in ring(sealed) {
            builder = builder.wall(wall);
        }
        let mut grid = builder.build().unwrap();
        let sensor = FixedSensor::new();
        let mut rec = Recorder::default();

        let config = AgentConfig { retry_interval_ticks: 5, ..Default::default() };
        let mut ctrl = controller(config, (0, 0));
        ctrl.set_goals(vec![tile(2, 0), tile(0, 2), sealed], None);

        drive(&mut ctrl, &mut grid, &sensor, &mut rec, 0..40);

        // Both reachable goals collected; the sealed one blocked and
        // retried without ever being abandoned.
        assert_eq!(ctrl.remaining_goals(), [sealed]);
        assert!(rec.blocked.iter().any(|(_, g)| *g == sealed));
        assert!(rec.retries.len() >= 2, "retry rounds keep firing");
        assert!(rec.give_ups.is_empty());

        // Open a gap in the ring; the next retry round unblocks the goal.
        grid.set_occupied(tile(6, 7), false).unwrap();
        drive(&mut ctrl, &mut grid, &sensor, &mut rec, 40..120);

        assert!(ctrl.is_finished());
        assert!(rec.collected.iter().any(|(_, g)| *g == sealed));
    }

    #[test]
    fn retry_budget_abandons_goal_and_moves_on() {
        let sealed = tile(7, 7);
        let mut builder = TileGridBuilder::new(9, 9);
        for wall in ring(sealed) {
            builder = builder.wall(wall);
        }
        let mut grid = builder.build().unwrap();
        let sensor = FixedSensor::new();
        let mut rec = Recorder::default();

        let config = AgentConfig {
            retry_interval_ticks: 5,
            max_retry_rounds: Some(2),
            ..Default::default()
        };
        let mut ctrl = controller(config, (0, 0));
        ctrl.set_goals(vec![sealed], Some(tile(0, 4)));

        drive(&mut ctrl, &mut grid, &sensor, &mut rec, 0..60);

        assert_eq!(rec.give_ups, [sealed]);
        assert!(rec.collected.is_empty());
        assert!(ctrl.is_finished(), "agent proceeds to the terminal goal");
        assert_eq!(ctrl.position(), tile(0, 4));
    }

    #[test]
    fn blocked_agent_stands_still() {
        let sealed = tile(4, 4);
        let mut builder = TileGridBuilder::new(6, 6);
        for wall in ring(sealed) {
            builder = builder.wall(wall);
        }
        let mut grid = builder.build().unwrap();
        let sensor = FixedSensor::new();
        let mut rec = Recorder::default();

        let config = AgentConfig { retry_interval_ticks: 10, ..Default::default() };
        let mut ctrl = controller(config, (0, 0));
        ctrl.set_goals(vec![sealed], None);

        let visited = drive(&mut ctrl, &mut grid, &sensor, &mut rec, 0..8);
        assert!(visited.is_empty(), "no waypoints while the only goal is blocked");
        assert_eq!(ctrl.position(), tile(0, 0));
        assert!(ctrl.blocked_goals().contains(&sealed));
    }
}

// ── Threats and danger avoidance ──────────────────────────────────────────────

#[cfg(test)]
mod threats {
    use nav_core::{EntityKind, WorldPoint};
    use nav_grid::FixedSensor;

    use crate::AgentConfig;

    use super::helpers::{controller, drive, open_grid, tile, Recorder};

    #[test]
    fn route_detours_around_a_threat() {
        let mut grid = open_grid(7, 5);
        let mut sensor = FixedSensor::new();
        // Stationary threat on the direct line from start to goal.  Its
        // occupied radius (1.5 tiles) marks the 3x3 block around (3,2).
        sensor.insert(EntityKind::Threat, WorldPoint { x: 3.5, y: 2.5 });

        let mut rec = Recorder::default();
        let mut ctrl = controller(AgentConfig::default(), (0, 2));
        ctrl.set_goals(vec![tile(6, 2)], None);

        let visited = drive(&mut ctrl, &mut grid, &sensor, &mut rec, 0..40);

        assert!(ctrl.is_finished());
        for t in visited {
            let danger_block = (2..=4).contains(&t.x) && (1..=3).contains(&t.y);
            assert!(!danger_block, "agent stepped into the marked zone at {t}");
        }
    }

    #[test]
    fn threat_marks_clear_after_it_leaves() {
        let mut grid = open_grid(7, 5);
        let mut sensor = FixedSensor::new();
        sensor.insert(EntityKind::Threat, WorldPoint { x: 3.5, y: 2.5 });

        let mut rec = Recorder::default();
        let mut ctrl = controller(AgentConfig::default(), (0, 2));
        ctrl.set_goals(vec![tile(6, 2)], None);

        drive(&mut ctrl, &mut grid, &sensor, &mut rec, 0..3);

        // Threat despawns; the next refresh unmarks its tiles.
        sensor.clear();
        drive(&mut ctrl, &mut grid, &sensor, &mut rec, 3..40);

        assert!(ctrl.is_finished());
        assert!(!grid.is_occupied(tile(3, 2)), "stale mark survived the threat");
    }

    #[test]
    fn danger_avoidance_off_still_respects_marks() {
        let mut grid = open_grid(7, 5);
        let mut sensor = FixedSensor::new();
        sensor.insert(EntityKind::Threat, WorldPoint { x: 3.5, y: 2.5 });

        let mut rec = Recorder::default();
        let config = AgentConfig { danger_avoidance: false, ..Default::default() };
        let mut ctrl = controller(config, (0, 2));
        ctrl.set_goals(vec![tile(6, 2)], None);

        let visited = drive(&mut ctrl, &mut grid, &sensor, &mut rec, 0..40);

        // Marked tiles block searches regardless of the evade branch.
        assert!(ctrl.is_finished());
        assert!(!visited.contains(&tile(3, 2)));
    }
}
