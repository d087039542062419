//! The built-in decision tree.
//!
//! Composed once per controller from [`AgentConfig`].  Structure:
//!
//! ```text
//! Selector("root")
//! ├── Sequence("evade")            (only when danger_avoidance is on)
//! │   ├── Condition("in_danger")
//! │   └── Action("reroute")
//! ├── Sequence("pursue")
//! │   ├── Condition("has_candidate")
//! │   ├── Action("request_goal_route")
//! │   └── Action("follow_route")
//! ├── Sequence("wait_for_retry")
//! │   ├── Condition("goals_blocked")
//! │   └── Action("wait_or_retry")
//! ├── Sequence("head_for_exit")
//! │   ├── Condition("goals_cleared")
//! │   ├── Condition("has_terminal")
//! │   ├── Action("request_terminal_route")
//! │   └── Action("follow_route")
//! └── Action("hold")
//! ```
//!
//! Leaves only read [`AgentMind`] and queue [`PlanIntent`]s; the sequence
//! semantics (continue past `Running`, stop on `Failure`) let a route
//! request and its follower run in the same tick.

use nav_core::TileCoord;
use nav_tree::{Action, BehaviorNode, BehaviorTree, Condition, NodeState, Selector, Sequence};

use crate::{AgentConfig, AgentMind, PlanIntent};

pub(crate) fn build_tree(config: &AgentConfig) -> BehaviorTree<AgentMind> {
    let retry_interval = config.retry_interval_ticks;

    let mut children: Vec<Box<dyn BehaviorNode<AgentMind>>> = Vec::new();

    if config.danger_avoidance {
        children.push(Box::new(Sequence::new(
            "evade",
            vec![
                condition("in_danger", |m: &AgentMind| m.in_danger),
                action("reroute", reroute),
            ],
        )));
    }

    children.push(Box::new(Sequence::new(
        "pursue",
        vec![
            condition("has_candidate", |m: &AgentMind| m.candidate_goal.is_some()),
            action("request_goal_route", request_goal_route),
            action("follow_route", follow_route),
        ],
    )));

    children.push(Box::new(Sequence::new(
        "wait_for_retry",
        vec![
            condition("goals_blocked", |m: &AgentMind| !m.blocked.is_empty()),
            action("wait_or_retry", move |m: &mut AgentMind| {
                wait_or_retry(m, retry_interval)
            }),
        ],
    )));

    children.push(Box::new(Sequence::new(
        "head_for_exit",
        vec![
            condition("goals_cleared", |m: &AgentMind| m.remaining_goals.is_empty()),
            condition("has_terminal", |m: &AgentMind| m.terminal_goal.is_some()),
            action("request_terminal_route", request_terminal_route),
            action("follow_route", follow_route),
        ],
    )));

    children.push(action("hold", |_: &mut AgentMind| NodeState::Success));

    BehaviorTree::new(Box::new(Selector::new("root", children)))
}

// ── Leaf implementations ──────────────────────────────────────────────────────

/// While inside the danger radius, recompute the route every tick so the
/// path tracks the latest occupancy marks as threats move.
fn reroute(m: &mut AgentMind) -> NodeState {
    match m.target() {
        Some(goal) => {
            m.intents.push(PlanIntent::Route { goal });
            NodeState::Running
        }
        // Nowhere to go; drop the path and sit tight until the threat moves.
        None => {
            if m.current_path.is_some() {
                m.intents.push(PlanIntent::Halt);
            }
            NodeState::Running
        }
    }
}

fn request_goal_route(m: &mut AgentMind) -> NodeState {
    // has_candidate ran first; a missing candidate here means a mis-wired
    // custom tree, and failing the branch is the safe answer.
    let Some(goal) = m.candidate_goal else {
        return NodeState::Failure;
    };
    request_route(m, goal)
}

fn request_terminal_route(m: &mut AgentMind) -> NodeState {
    let Some(goal) = m.terminal_goal else {
        return NodeState::Failure;
    };
    request_route(m, goal)
}

fn request_route(m: &mut AgentMind, goal: TileCoord) -> NodeState {
    if m.position == goal {
        return NodeState::Success;
    }
    if m.routed_to(goal) {
        return NodeState::Success;
    }
    m.intents.push(PlanIntent::Route { goal });
    NodeState::Running
}

/// Running while a route exists or was just requested; Success once the
/// agent stands on the route's goal; Failure when there is nothing to
/// follow (the preceding request failed to apply last tick).
fn follow_route(m: &mut AgentMind) -> NodeState {
    if let Some(path) = &m.current_path {
        if path.goal() == Some(m.position) {
            return NodeState::Success;
        }
        return NodeState::Running;
    }
    if m.route_requested() {
        return NodeState::Running;
    }
    if m.target() == Some(m.position) {
        return NodeState::Success;
    }
    NodeState::Failure
}

/// Stand still; queue a retry round once the interval has elapsed.
fn wait_or_retry(m: &mut AgentMind, retry_interval: u64) -> NodeState {
    if m.now.since(m.last_retry) >= retry_interval {
        m.intents.push(PlanIntent::RetryBlocked);
    }
    NodeState::Running
}

// ── Boxing helpers ────────────────────────────────────────────────────────────

fn condition(
    name: &'static str,
    pred: impl Fn(&AgentMind) -> bool + 'static,
) -> Box<dyn BehaviorNode<AgentMind>> {
    Box::new(Condition::new(name, pred))
}

fn action(
    name: &'static str,
    act: impl Fn(&mut AgentMind) -> NodeState + 'static,
) -> Box<dyn BehaviorNode<AgentMind>> {
    Box::new(Action::new(name, act))
}
