//! Leaf nodes: conditions and actions over plain closures.

use std::marker::PhantomData;

use crate::{BehaviorNode, NodeState};

/// A read-only predicate leaf.
///
/// Ticks to `Success` when the closure returns true, `Failure` otherwise.
/// Conditions never return `Running` and never mutate the context.
pub struct Condition<C, F: Fn(&C) -> bool> {
    name: &'static str,
    pred: F,
    _ctx: PhantomData<fn(&C)>,
}

impl<C, F: Fn(&C) -> bool> Condition<C, F> {
    pub fn new(name: &'static str, pred: F) -> Self {
        Self { name, pred, _ctx: PhantomData }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C, F: Fn(&C) -> bool> BehaviorNode<C> for Condition<C, F> {
    fn tick(&self, ctx: &mut C) -> NodeState {
        if (self.pred)(ctx) { NodeState::Success } else { NodeState::Failure }
    }
}

/// A mutating work leaf.
///
/// The closure does one tick's worth of work against the context and reports
/// how it went.
pub struct Action<C, F: Fn(&mut C) -> NodeState> {
    name: &'static str,
    act: F,
    _ctx: PhantomData<fn(&C)>,
}

impl<C, F: Fn(&mut C) -> NodeState> Action<C, F> {
    pub fn new(name: &'static str, act: F) -> Self {
        Self { name, act, _ctx: PhantomData }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C, F: Fn(&mut C) -> NodeState> BehaviorNode<C> for Action<C, F> {
    fn tick(&self, ctx: &mut C) -> NodeState {
        (self.act)(ctx)
    }
}
