//! The per-tick driver tying grid, tracker, pathfinder, and tree together.

use log::debug;
use rustc_hash::FxHashSet;

use nav_core::{EntityKind, Tick, TileCoord, WorldPoint};
use nav_grid::{OccupancyConfig, OccupancyTracker, SpatialSensor, TileGrid};
use nav_path::Pathfinder;
use nav_tree::{BehaviorTree, NodeState};

use crate::tree::build_tree;
use crate::{AgentConfig, AgentMind, AgentObserver, AgentResult, PlanIntent};

/// One agent's navigation brain.
///
/// Generic over the [`Pathfinder`] so hosts can swap search algorithms.
/// The controller owns its [`AgentMind`], [`OccupancyTracker`], and the
/// built-in tree; the host owns the grid, the sensor, and the clock, and
/// passes them in each tick.
///
/// # Per-tick contract
///
/// [`tick`](Self::tick) runs, in order: sensor query → occupancy refresh →
/// danger check and candidate-goal selection → tree evaluation → intent
/// application.  The ordering is part of the contract — marks are always
/// current when the tree decides, and searches always see the marks.
pub struct AgentController<P: Pathfinder> {
    config:     AgentConfig,
    pathfinder: P,
    tracker:    OccupancyTracker,
    tree:       BehaviorTree<AgentMind>,
    mind:       AgentMind,
}

impl<P: Pathfinder> AgentController<P> {
    /// Validates both configs; an invalid combination never produces a
    /// half-constructed controller.
    pub fn new(
        config: AgentConfig,
        occupancy: OccupancyConfig,
        pathfinder: P,
        start: TileCoord,
    ) -> AgentResult<Self> {
        config.validate()?;
        let tracker = OccupancyTracker::new(occupancy)?;
        let tree = build_tree(&config);
        Ok(Self {
            config,
            pathfinder,
            tracker,
            tree,
            mind: AgentMind::new(start),
        })
    }

    // ── Goal setup ───────────────────────────────────────────────────────

    /// Replace the goal list and terminal goal directly.
    pub fn set_goals(&mut self, goals: Vec<TileCoord>, terminal: Option<TileCoord>) {
        self.mind.remaining_goals = goals;
        self.mind.terminal_goal = terminal;
        self.mind.blocked.clear();
        self.mind.retry_rounds.clear();
        self.mind.force_replan = true;
    }

    /// Populate goals from the sensor: every `Pickup` snaps to its closest
    /// tile (sorted, deduplicated), and the first `Exit` reported becomes
    /// the terminal goal.
    pub fn discover_goals<S: SpatialSensor>(&mut self, grid: &TileGrid, sensor: &S) {
        let center = grid.world_pos(self.mind.position);
        let mut goals = Vec::new();
        let mut terminal = None;
        for (kind, pos) in sensor.query(center, self.config.sense_radius) {
            match kind {
                EntityKind::Pickup => goals.push(grid.closest_tile(pos)),
                EntityKind::Exit if terminal.is_none() => {
                    terminal = Some(grid.closest_tile(pos));
                }
                _ => {}
            }
        }
        goals.sort_unstable();
        goals.dedup();
        debug!(
            "discovered {} goals, terminal {:?}",
            goals.len(),
            terminal
        );
        self.set_goals(goals, terminal);
    }

    // ── The tick ─────────────────────────────────────────────────────────

    /// Advance one tick.  Returns the tree's overall state: `Running` while
    /// pursuing or waiting, `Success` once everything is done (or the agent
    /// is idle with nothing to do).
    pub fn tick<S: SpatialSensor, O: AgentObserver>(
        &mut self,
        now: Tick,
        grid: &mut TileGrid,
        sensor: &S,
        observer: &mut O,
    ) -> NodeState {
        self.mind.now = now;

        let center = grid.world_pos(self.mind.position);
        let threats: Vec<WorldPoint> = sensor
            .query(center, self.config.sense_radius)
            .into_iter()
            .filter(|(kind, _)| *kind == EntityKind::Threat)
            .map(|(_, pos)| pos)
            .collect();
        self.tracker.refresh(grid, &threats);

        self.mind.in_danger =
            self.config.danger_avoidance && self.tracker.in_danger_zone(grid, center, &threats);
        self.mind.candidate_goal = self.select_goal(grid);

        let state = self.tree.tick(&mut self.mind);
        self.apply_intents(grid, observer);
        state
    }

    /// The host reports that its entity arrived on `tile`.
    ///
    /// Advances the path cursor; when `tile` is a remaining goal, consumes
    /// it and immediately replans toward the next target rather than
    /// waiting for the following tick.
    pub fn report_tile_reached<O: AgentObserver>(
        &mut self,
        grid: &TileGrid,
        tile: TileCoord,
        observer: &mut O,
    ) {
        self.mind.position = tile;

        if let Some(path) = &self.mind.current_path {
            if path.get(self.mind.cursor) == Some(tile) {
                self.mind.cursor += 1;
            }
            if self.mind.cursor >= path.len() {
                self.mind.current_path = None;
                self.mind.cursor = 0;
            }
        }

        let Some(i) = self.mind.remaining_goals.iter().position(|&g| g == tile) else {
            return;
        };
        self.mind.remaining_goals.remove(i);
        self.mind.blocked.remove(&tile);
        self.mind.retry_rounds.remove(&tile);
        observer.on_goal_collected(self.mind.now, tile);
        debug!("goal {tile} collected, {} remaining", self.mind.remaining_goals.len());

        // Eager replan on consumption: head for the next target now.
        self.mind.current_path = None;
        self.mind.cursor = 0;
        self.mind.force_replan = true;
        if let Some(next) = self.select_goal(grid).or(self.mind.terminal_goal) {
            if next != tile {
                self.apply_route(grid, next, observer);
            }
        }
    }

    /// Ask for a fresh path on the next tick (for hosts that edit walls).
    pub fn request_replan(&mut self) {
        self.mind.force_replan = true;
    }

    // ── State published to the host ──────────────────────────────────────

    pub fn position(&self) -> TileCoord {
        self.mind.position
    }

    pub fn current_path(&self) -> Option<&nav_path::Path> {
        self.mind.current_path.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.mind.cursor
    }

    /// The tile the host should move toward next, if any.
    pub fn next_waypoint(&self) -> Option<TileCoord> {
        self.mind
            .current_path
            .as_ref()
            .and_then(|p| p.get(self.mind.cursor))
    }

    pub fn remaining_goals(&self) -> &[TileCoord] {
        &self.mind.remaining_goals
    }

    pub fn blocked_goals(&self) -> &FxHashSet<TileCoord> {
        &self.mind.blocked
    }

    pub fn terminal_goal(&self) -> Option<TileCoord> {
        self.mind.terminal_goal
    }

    /// All goals collected and the terminal goal (if any) reached.
    pub fn is_finished(&self) -> bool {
        self.mind.remaining_goals.is_empty()
            && self
                .mind
                .terminal_goal
                .is_none_or(|t| t == self.mind.position)
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    // ── Internals ────────────────────────────────────────────────────────

    /// The goal the tree should pursue this tick, per the configured
    /// policy, excluding blocked goals.  `None` when every remaining goal
    /// is blocked (or none remain).
    fn select_goal(&self, grid: &TileGrid) -> Option<TileCoord> {
        let mut unblocked = self
            .mind
            .remaining_goals
            .iter()
            .copied()
            .filter(|g| !self.mind.blocked.contains(g));
        match self.config.goal_policy {
            crate::GoalPolicy::FixedOrder => unblocked.next(),
            crate::GoalPolicy::Nearest => {
                let from = grid.world_pos(self.mind.position);
                unblocked.min_by(|a, b| {
                    let da = from.distance_sq(grid.world_pos(*a));
                    let db = from.distance_sq(grid.world_pos(*b));
                    da.total_cmp(&db).then_with(|| a.cmp(b))
                })
            }
        }
    }

    fn apply_intents<O: AgentObserver>(&mut self, grid: &TileGrid, observer: &mut O) {
        let intents = std::mem::take(&mut self.mind.intents);
        for intent in intents {
            match intent {
                PlanIntent::Route { goal } => self.apply_route(grid, goal, observer),
                PlanIntent::Halt => {
                    self.mind.current_path = None;
                    self.mind.cursor = 0;
                }
                PlanIntent::RetryBlocked => self.apply_retry(observer),
            }
        }
    }

    fn apply_route<O: AgentObserver>(
        &mut self,
        grid: &TileGrid,
        goal: TileCoord,
        observer: &mut O,
    ) {
        let empty = FxHashSet::default();
        match self
            .pathfinder
            .find_path(grid, self.mind.position, goal, &empty)
        {
            Ok(path) => {
                // The path starts on the agent's tile; the cursor skips it.
                let skip = path.first() == Some(self.mind.position);
                self.mind.cursor = usize::from(skip);
                if self.mind.cursor >= path.len() {
                    // Already standing on the goal.
                    self.mind.current_path = None;
                    self.mind.cursor = 0;
                } else {
                    self.mind.current_path = Some(path);
                }
                self.mind.force_replan = false;
                observer.on_replan(self.mind.now, self.mind.position, goal);
            }
            Err(err) => {
                debug!("route to {goal} failed: {err}; goal blocked");
                self.mind.blocked.insert(goal);
                self.mind.current_path = None;
                self.mind.cursor = 0;
                observer.on_goal_blocked(self.mind.now, goal);
            }
        }
    }

    /// A retry round: charge every blocked goal one round, abandon the ones
    /// past the budget, then clear the blocked set so the next tick
    /// re-attempts the survivors.
    fn apply_retry<O: AgentObserver>(&mut self, observer: &mut O) {
        let mut blocked: Vec<TileCoord> = self.mind.blocked.iter().copied().collect();
        blocked.sort_unstable();

        for goal in blocked {
            // Only collectible goals carry a retry budget; a blocked
            // terminal goal is simply re-attempted.
            if !self.mind.remaining_goals.contains(&goal) {
                continue;
            }
            let rounds = self.mind.retry_rounds.entry(goal).or_insert(0);
            *rounds += 1;
            if let Some(max) = self.config.max_retry_rounds {
                if *rounds >= max {
                    self.mind.remaining_goals.retain(|&g| g != goal);
                    self.mind.retry_rounds.remove(&goal);
                    debug!("goal {goal} abandoned after {max} retry rounds");
                    observer.on_give_up(self.mind.now, goal);
                }
            }
        }

        self.mind.blocked.clear();
        self.mind.last_retry = self.mind.now;
        debug!("retry round at {}", self.mind.now);
        observer.on_retry(self.mind.now);
    }
}
