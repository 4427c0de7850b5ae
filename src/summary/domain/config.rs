//! Summary configuration.

use serde::{Deserialize, Serialize};

/// Tuning for summary and suggestion prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Maximum number of task suggestions returned.
    pub max_suggestions: usize,
    /// Replacement for the built-in status prompt template.
    pub status_template: Option<String>,
    /// Replacement for the built-in suggestion prompt template.
    pub suggestion_template: Option<String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            status_template: None,
            suggestion_template: None,
        }
    }
}
