//! `nav-tree` — a small generic behavior-tree engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`status`]    | `NodeState` — the tri-state tick result                   |
//! | [`node`]      | `BehaviorNode<C>` trait                                   |
//! | [`leaf`]      | `Condition` and `Action` leaves over closures             |
//! | [`composite`] | `Selector` and `Sequence` composites                      |
//! | [`tree`]      | `BehaviorTree<C>` — root wrapper with last-state tracking |
//! | [`blackboard`]| Typed key/value store shared between leaves               |
//! | [`error`]     | `TreeError`, `TreeResult<T>`                              |
//!
//! # Design notes
//!
//! The engine is generic over a context type `C`: every tick receives
//! `&mut C` and leaves read and write whatever the embedding application
//! keeps there.  Nodes themselves are stateless between ticks — the tree is
//! re-evaluated from the root each time, and anything that must persist
//! (cooldowns, cursors, flags) lives in the context, not in the nodes.  This
//! keeps composites trivially restartable and makes the whole tree `Send`
//! whenever the closures are.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod blackboard;
pub mod composite;
pub mod error;
pub mod leaf;
pub mod node;
pub mod status;
pub mod tree;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use blackboard::{Blackboard, Value, ValueKind};
pub use composite::{Selector, Sequence};
pub use error::{TreeError, TreeResult};
pub use leaf::{Action, Condition};
pub use node::BehaviorNode;
pub use status::NodeState;
pub use tree::BehaviorTree;
