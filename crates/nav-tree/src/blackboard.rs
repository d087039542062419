//! Typed key/value store shared between leaves.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use nav_core::{Tick, TileCoord, WorldPoint};

use crate::{TreeError, TreeResult};

// ── Values ────────────────────────────────────────────────────────────────────

/// The closed set of value types a blackboard slot can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Bool(bool),
    Int(i64),
    Tick(Tick),
    Tile(TileCoord),
    Point(WorldPoint),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Tick(_) => ValueKind::Tick,
            Value::Tile(_) => ValueKind::Tile,
            Value::Point(_) => ValueKind::Point,
        }
    }
}

/// A `Value`'s discriminant, for mismatch reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Bool,
    Int,
    Tick,
    Tile,
    Point,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Tick => "tick",
            ValueKind::Tile => "tile",
            ValueKind::Point => "point",
        };
        f.write_str(s)
    }
}

// ── Blackboard ────────────────────────────────────────────────────────────────

/// Shared scratch state for a tree's leaves, keyed by an application-chosen
/// key type (typically a small `enum`).
///
/// Typed accessors report a missing key or a kind mismatch as a
/// [`TreeError`] rather than panicking, so a mis-wired tree surfaces as a
/// recoverable error at the call site.
#[derive(Debug, Default, Clone)]
pub struct Blackboard<K: Copy + Eq + Hash + fmt::Debug> {
    slots: FxHashMap<K, Value>,
}

impl<K: Copy + Eq + Hash + fmt::Debug> Blackboard<K> {
    pub fn new() -> Self {
        Self { slots: FxHashMap::default() }
    }

    /// Insert or overwrite; the previous value (if any) is returned.
    pub fn set(&mut self, key: K, value: Value) -> Option<Value> {
        self.slots.insert(key, value)
    }

    pub fn get(&self, key: K) -> Option<&Value> {
        self.slots.get(&key)
    }

    pub fn contains(&self, key: K) -> bool {
        self.slots.contains_key(&key)
    }

    pub fn remove(&mut self, key: K) -> Option<Value> {
        self.slots.remove(&key)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // ── Typed accessors ──────────────────────────────────────────────────

    pub fn get_bool(&self, key: K) -> TreeResult<bool> {
        match self.require(key)? {
            Value::Bool(v) => Ok(*v),
            other => Err(mismatch(ValueKind::Bool, other)),
        }
    }

    pub fn get_int(&self, key: K) -> TreeResult<i64> {
        match self.require(key)? {
            Value::Int(v) => Ok(*v),
            other => Err(mismatch(ValueKind::Int, other)),
        }
    }

    pub fn get_tick(&self, key: K) -> TreeResult<Tick> {
        match self.require(key)? {
            Value::Tick(v) => Ok(*v),
            other => Err(mismatch(ValueKind::Tick, other)),
        }
    }

    pub fn get_tile(&self, key: K) -> TreeResult<TileCoord> {
        match self.require(key)? {
            Value::Tile(v) => Ok(*v),
            other => Err(mismatch(ValueKind::Tile, other)),
        }
    }

    pub fn get_point(&self, key: K) -> TreeResult<WorldPoint> {
        match self.require(key)? {
            Value::Point(v) => Ok(*v),
            other => Err(mismatch(ValueKind::Point, other)),
        }
    }

    fn require(&self, key: K) -> TreeResult<&Value> {
        self.slots
            .get(&key)
            .ok_or_else(|| TreeError::KeyMissing(format!("{key:?}")))
    }
}

fn mismatch(expected: ValueKind, found: &Value) -> TreeError {
    TreeError::TypeMismatch { expected, found: found.kind() }
}
