//! The tree context: everything the built-in tree reads and writes.

use rustc_hash::{FxHashMap, FxHashSet};

use nav_core::{Tick, TileCoord};
use nav_path::Path;

/// A planning request produced by a tree leaf.
///
/// Leaves never touch the grid or the pathfinder directly; they queue
/// intents on the [`AgentMind`] and the controller applies them in order
/// after the tree has been evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanIntent {
    /// Compute a fresh path from the agent's tile to `goal`.
    Route { goal: TileCoord },
    /// Drop the current path and stand still.
    Halt,
    /// A retry round: clear the blocked set (subject to the give-up policy)
    /// and reset the retry timer.
    RetryBlocked,
}

/// Mutable agent state threaded through the behavior tree as its context.
///
/// Fields are public so hosts can compose custom trees over the same state;
/// the controller owns the instance and upholds the invariants between
/// ticks (cursor in range, blocked ⊆ interesting goals, intents drained).
#[derive(Debug, Default)]
pub struct AgentMind {
    /// The agent's current tile.
    pub position: TileCoord,
    /// Goals not yet collected, in discovery order.
    pub remaining_goals: Vec<TileCoord>,
    /// Where to go once every goal is collected.
    pub terminal_goal: Option<TileCoord>,
    /// Goals that most recently had no path; cleared by retry rounds.
    pub blocked: FxHashSet<TileCoord>,
    /// How many retry rounds each goal has sat through while blocked.
    pub retry_rounds: FxHashMap<TileCoord, u32>,
    /// The path being followed, if any.
    pub current_path: Option<Path>,
    /// Index of the next waypoint in `current_path`.
    pub cursor: usize,
    /// When the last retry round fired.
    pub last_retry: Tick,

    // Per-tick inputs, written by the controller before each evaluation.
    /// The current tick.
    pub now: Tick,
    /// Whether the agent stands inside a threat's danger radius.
    pub in_danger: bool,
    /// The goal selected for this tick, if any unblocked goal remains.
    pub candidate_goal: Option<TileCoord>,

    /// Set when the current path was invalidated (goal consumed, host
    /// request); cleared when a route is successfully applied.
    pub force_replan: bool,
    /// Intents queued by leaves this tick; drained by the controller.
    pub intents: Vec<PlanIntent>,
}

impl AgentMind {
    pub(crate) fn new(position: TileCoord) -> Self {
        Self { position, ..Self::default() }
    }

    /// Whether a `Route` intent is already queued this tick.
    pub fn route_requested(&self) -> bool {
        self.intents
            .iter()
            .any(|i| matches!(i, PlanIntent::Route { .. }))
    }

    /// Whether the current path (if any) leads to `goal` and is still valid.
    pub fn routed_to(&self, goal: TileCoord) -> bool {
        !self.force_replan
            && self
                .current_path
                .as_ref()
                .is_some_and(|p| p.goal() == Some(goal))
    }

    /// The goal the pursuit branch should head for: the candidate if one
    /// exists, otherwise the terminal goal.
    pub fn target(&self) -> Option<TileCoord> {
        self.candidate_goal.or(self.terminal_goal)
    }
}
