//! Validated completion percentage.

use super::ProductionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer completion percentage in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// No work done.
    pub const ZERO: Self = Self(0);

    /// Fully delivered.
    pub const COMPLETE: Self = Self(100);

    const MAX: u8 = 100;

    /// Creates a validated progress value.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionDomainError::ProgressOutOfRange`] when `value` is
    /// negative or above 100.
    pub fn new(value: i64) -> Result<Self, ProductionDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|percent| *percent <= Self::MAX)
            .map(Self)
            .ok_or(ProductionDomainError::ProgressOutOfRange(value))
    }

    /// Creates a progress value, saturating into `0..=100`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let bounded = value.clamp(0, i64::from(Self::MAX));
        Self(u8::try_from(bounded).unwrap_or(Self::MAX))
    }

    /// Builds a value from the stage table, which only holds in-range
    /// constants.
    pub(super) const fn from_table(percent: u8) -> Self {
        Self(percent)
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Progress {
    type Error = ProductionDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
