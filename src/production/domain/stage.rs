//! Production pipeline stages and their canonical progress values.

use super::{ParseStageError, Progress};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a production project.
///
/// Variants are declared in pipeline order, so the derived [`Ord`] matches
/// [`Stage::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Initial pitch to a client or commissioner.
    Pitch,
    /// Scope and budget discussion.
    Discussion,
    /// Planning, casting, scheduling.
    PreProduction,
    /// Shooting or recording.
    Production,
    /// Editing, grading, mixing.
    PostProduction,
    /// Delivered. Terminal.
    Released,
}

impl Stage {
    /// Every stage in pipeline order.
    pub const ALL: [Self; 6] = [
        Self::Pitch,
        Self::Discussion,
        Self::PreProduction,
        Self::Production,
        Self::PostProduction,
        Self::Released,
    ];

    /// Returns the zero-based position of the stage in the pipeline.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Pitch => 0,
            Self::Discussion => 1,
            Self::PreProduction => 2,
            Self::Production => 3,
            Self::PostProduction => 4,
            Self::Released => 5,
        }
    }

    /// Returns the stage at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the following stage, or `None` for [`Stage::Released`].
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the preceding stage, or `None` for [`Stage::Pitch`].
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Returns `true` for the final pipeline stage.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Released)
    }

    /// Returns the progress a project is reset to on entering this stage.
    #[must_use]
    pub const fn canonical_progress(self) -> Progress {
        let percent = match self {
            Self::Pitch => 5,
            Self::Discussion => 15,
            Self::PreProduction => 35,
            Self::Production => 65,
            Self::PostProduction => 85,
            Self::Released => 100,
        };
        Progress::from_table(percent)
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pitch => "pitch",
            Self::Discussion => "discussion",
            Self::PreProduction => "pre-production",
            Self::Production => "production",
            Self::PostProduction => "post-production",
            Self::Released => "released",
        }
    }

    /// Returns the label shown to studio staff.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pitch => "Pitch",
            Self::Discussion => "Discussion",
            Self::PreProduction => "Pre-Production",
            Self::Production => "Production",
            Self::PostProduction => "Post-Production",
            Self::Released => "Released",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Stage {
    type Error = ParseStageError;

    /// Accepts storage keys and labels alike: `pre-production`,
    /// `Pre-Production`, `pre_production` and `pre production` all parse.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == normalized)
            .ok_or_else(|| ParseStageError(value.to_owned()))
    }
}
