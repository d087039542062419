//! Decision observer trait for hosts that want to watch the controller.

use nav_core::{Tick, TileCoord};

/// Callbacks invoked by [`AgentController`][crate::AgentController] at key
/// decision points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait AgentObserver {
    /// A fresh path was computed from `from` toward `goal`.
    fn on_replan(&mut self, _now: Tick, _from: TileCoord, _goal: TileCoord) {}

    /// The pathfinder found no path to `goal`; it joined the blocked set.
    fn on_goal_blocked(&mut self, _now: Tick, _goal: TileCoord) {}

    /// The agent reached a remaining goal and consumed it.
    fn on_goal_collected(&mut self, _now: Tick, _goal: TileCoord) {}

    /// A retry round fired: the blocked set was cleared for re-attempt.
    fn on_retry(&mut self, _now: Tick) {}

    /// A goal exhausted its retry budget and was abandoned.
    fn on_give_up(&mut self, _now: Tick, _goal: TileCoord) {}
}

/// An [`AgentObserver`] that does nothing.  Use when you need to tick the
/// controller but don't want decision callbacks.
pub struct NoopObserver;

impl AgentObserver for NoopObserver {}
