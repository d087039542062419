//! Controller configuration.

use crate::{AgentError, AgentResult};

/// How the controller picks the next goal from the remaining, unblocked set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalPolicy {
    /// Nearest by world-space distance from the agent's current tile center;
    /// ties broken by tile coordinate order.
    #[default]
    Nearest,
    /// The goal list's own order, skipping blocked entries.
    FixedOrder,
}

/// Tunables for one [`AgentController`][crate::AgentController].
///
/// Validated once at controller construction; an invalid combination is an
/// [`AgentError::Config`] there, never a mid-run panic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentConfig {
    /// Replan away from threats while inside the danger radius.
    pub danger_avoidance: bool,

    /// Goal selection policy.
    pub goal_policy: GoalPolicy,

    /// Ticks between retry rounds for blocked goals.  Must be at least 1.
    pub retry_interval_ticks: u64,

    /// Abandon a goal after this many failed retry rounds.  `None` retries
    /// forever.
    pub max_retry_rounds: Option<u32>,

    /// World-space radius for sensor queries.  `f32::INFINITY` senses
    /// everything the host's sensor knows about.
    pub sense_radius: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            danger_avoidance:     true,
            goal_policy:          GoalPolicy::Nearest,
            retry_interval_ticks: 20,
            max_retry_rounds:     None,
            sense_radius:         f32::INFINITY,
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> AgentResult<()> {
        if self.retry_interval_ticks == 0 {
            return Err(AgentError::Config(
                "retry_interval_ticks must be at least 1".into(),
            ));
        }
        if self.sense_radius.is_nan() || self.sense_radius < 0.0 {
            return Err(AgentError::Config(format!(
                "sense_radius must be non-negative, got {}",
                self.sense_radius
            )));
        }
        if let Some(0) = self.max_retry_rounds {
            return Err(AgentError::Config(
                "max_retry_rounds of 0 would abandon every goal immediately; \
                 use None to retry forever"
                    .into(),
            ));
        }
        Ok(())
    }
}
