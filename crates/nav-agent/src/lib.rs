//! `nav-agent` — the goal-pursuing agent controller.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`config`]   | `AgentConfig`, `GoalPolicy`                                |
//! | [`mind`]     | `AgentMind` (tree context), `PlanIntent`                   |
//! | [`tree`]     | The built-in decision tree composed from `nav-tree` nodes  |
//! | [`controller`]| `AgentController` — the per-tick driver                   |
//! | [`observer`] | `AgentObserver` hooks, `NoopObserver`                      |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                             |
//!
//! # Tick loop
//!
//! The controller runs a two-phase loop each tick:
//!
//! 1. **Decide**: sense threats, refresh occupancy marks, pick a candidate
//!    goal, then evaluate the behavior tree against [`AgentMind`].  Tree
//!    leaves never call the pathfinder; they only push [`PlanIntent`]s.
//!
//! 2. **Apply**: drain the collected intents in order and mutate real state —
//!    run searches, block unreachable goals, reset the retry timer.
//!
//! The split keeps tree evaluation side-effect-free with respect to the grid
//! and pathfinder, so custom trees over `AgentMind` stay cheap to reason
//! about.
//!
//! The controller never moves the agent.  The host advances its entity
//! toward [`AgentController::next_waypoint`] and calls
//! [`AgentController::report_tile_reached`] when a tile is reached; goal
//! consumption and the eager replan happen there.

pub mod config;
pub mod controller;
pub mod error;
pub mod mind;
pub mod observer;
pub mod tree;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AgentConfig, GoalPolicy};
pub use controller::AgentController;
pub use error::{AgentError, AgentResult};
pub use mind::{AgentMind, PlanIntent};
pub use observer::{AgentObserver, NoopObserver};
