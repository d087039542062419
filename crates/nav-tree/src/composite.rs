//! Composite nodes: `Selector` and `Sequence`.

use crate::{BehaviorNode, NodeState};

type Children<C> = Vec<Box<dyn BehaviorNode<C>>>;

/// Ticks children in order and returns the first non-`Failure` result.
///
/// A child's `Success` or `Running` short-circuits: later children are not
/// ticked at all this frame.  Only if every child fails does the selector
/// fail.
pub struct Selector<C> {
    name: &'static str,
    children: Children<C>,
}

impl<C> Selector<C> {
    pub fn new(name: &'static str, children: Children<C>) -> Self {
        Self { name, children }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C> BehaviorNode<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> NodeState {
        for child in &self.children {
            match child.tick(ctx) {
                NodeState::Failure => continue,
                state => return state,
            }
        }
        NodeState::Failure
    }
}

/// Ticks children in order; fails fast on the first `Failure`.
///
/// Unlike the textbook sequence, a `Running` child does *not* stop the
/// sweep: remaining children are still ticked this frame, and the sequence
/// reports `Running` if any child did.  This lets a plan-then-act pair run
/// within a single tick — the planner reports `Running` while the follower
/// right after it consumes the freshly requested plan.
pub struct Sequence<C> {
    name: &'static str,
    children: Children<C>,
}

impl<C> Sequence<C> {
    pub fn new(name: &'static str, children: Children<C>) -> Self {
        Self { name, children }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C> BehaviorNode<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> NodeState {
        let mut any_running = false;
        for child in &self.children {
            match child.tick(ctx) {
                NodeState::Failure => return NodeState::Failure,
                NodeState::Running => any_running = true,
                NodeState::Success => {}
            }
        }
        if any_running { NodeState::Running } else { NodeState::Success }
    }
}
