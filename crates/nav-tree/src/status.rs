//! The tri-state tick result.

use std::fmt;

/// Outcome of ticking a node (or a whole tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    /// Work is in progress; tick again next frame.
    Running,
    /// The node's goal is achieved.
    Success,
    /// The node cannot achieve its goal right now.
    Failure,
}

impl NodeState {
    pub fn is_running(self) -> bool {
        self == NodeState::Running
    }

    pub fn is_success(self) -> bool {
        self == NodeState::Success
    }

    pub fn is_failure(self) -> bool {
        self == NodeState::Failure
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeState::Running => "running",
            NodeState::Success => "success",
            NodeState::Failure => "failure",
        };
        f.write_str(s)
    }
}
