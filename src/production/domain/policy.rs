//! Policy knobs for stage transitions and manual progress edits.

use super::{ProductionDomainError, Progress};
use serde::{Deserialize, Serialize};

/// How out-of-range manual progress values are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressPolicy {
    /// Reject values outside `0..=100`.
    #[default]
    Reject,
    /// Saturate values into `0..=100`.
    Clamp,
}

impl ProgressPolicy {
    /// Converts a raw caller value into a [`Progress`] under this policy.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionDomainError::ProgressOutOfRange`] under
    /// [`ProgressPolicy::Reject`] when `value` is outside `0..=100`.
    pub fn apply(self, value: i64) -> Result<Progress, ProductionDomainError> {
        match self {
            Self::Reject => Progress::new(value),
            Self::Clamp => Ok(Progress::clamped(value)),
        }
    }
}

/// Lifecycle rules applied by the stage-progress coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecyclePolicy {
    /// Whether an explicit stage change may move a project to an earlier
    /// stage.
    pub allow_backward_transitions: bool,
    /// Handling of out-of-range manual progress values.
    pub progress: ProgressPolicy,
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            allow_backward_transitions: true,
            progress: ProgressPolicy::Reject,
        }
    }
}

impl LifecyclePolicy {
    /// Creates a permissive policy: backward moves allowed, manual progress
    /// clamped.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            allow_backward_transitions: true,
            progress: ProgressPolicy::Clamp,
        }
    }

    /// Creates a strict policy: forward-only stage changes, out-of-range
    /// progress rejected.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_backward_transitions: false,
            progress: ProgressPolicy::Reject,
        }
    }
}
