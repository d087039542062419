//! The tree wrapper around a root node.

use crate::{BehaviorNode, NodeState};

/// A behavior tree: a root node plus the result of the most recent tick.
///
/// Re-evaluated from the root every tick.  The remembered `last_state` is
/// for observers and assertions only; it never influences evaluation.
pub struct BehaviorTree<C> {
    root: Box<dyn BehaviorNode<C>>,
    last_state: Option<NodeState>,
}

impl<C> BehaviorTree<C> {
    pub fn new(root: Box<dyn BehaviorNode<C>>) -> Self {
        Self { root, last_state: None }
    }

    /// Evaluate the whole tree against `ctx` and record the result.
    pub fn tick(&mut self, ctx: &mut C) -> NodeState {
        let state = self.root.tick(ctx);
        self.last_state = Some(state);
        state
    }

    /// Result of the most recent [`tick`](Self::tick), if any.
    pub fn last_state(&self) -> Option<NodeState> {
        self.last_state
    }
}
