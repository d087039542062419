//! Agent controller error type.

use thiserror::Error;

use nav_core::NavError;

/// Errors produced by `nav-agent`.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid agent config: {0}")]
    Config(String),

    #[error(transparent)]
    Nav(#[from] NavError),
}

pub type AgentResult<T> = Result<T, AgentError>;
