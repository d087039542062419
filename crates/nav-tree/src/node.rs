//! The node trait every tree element implements.

use crate::NodeState;

/// A behavior-tree node, generic over the application's context type.
///
/// Nodes hold no per-tick state of their own; everything that must survive
/// between ticks belongs in `C`.  Composites tick their children in order and
/// combine the results, leaves inspect or mutate the context directly.
pub trait BehaviorNode<C> {
    fn tick(&self, ctx: &mut C) -> NodeState;
}

impl<C, N: BehaviorNode<C> + ?Sized> BehaviorNode<C> for Box<N> {
    fn tick(&self, ctx: &mut C) -> NodeState {
        (**self).tick(ctx)
    }
}
