//! Studio-wide configuration loaded at startup.

use crate::access::domain::{AdminIdentities, ConfiguredAdminPolicy};
use crate::production::domain::LifecyclePolicy;
use crate::summary::domain::SummaryConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid configuration JSON.
    #[error("invalid studio configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration. Every section is optional and defaulted.
///
/// ```
/// use stagecraft::config::StudioConfig;
///
/// let config = StudioConfig::from_json_str(
///     r#"{ "lifecycle": { "allow_backward_transitions": false } }"#,
/// )
/// .expect("valid configuration");
/// assert!(!config.lifecycle.allow_backward_transitions);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Stage transition and progress rules.
    pub lifecycle: LifecyclePolicy,
    /// Identities granted admin rights.
    pub admins: AdminIdentities,
    /// Summary prompt tuning.
    pub summary: SummaryConfig,
}

impl StudioConfig {
    /// Parses configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed or a
    /// field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the admin policy described by this configuration.
    #[must_use]
    pub fn admin_policy(&self) -> ConfiguredAdminPolicy {
        ConfiguredAdminPolicy::new(&self.admins)
    }
}
