//! Authenticated viewers and their studio roles.

use crate::production::domain::UserId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role a user holds on the studio roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    /// Studio administrator. Sees every project.
    Admin,
    /// Runs productions. Sees every project.
    Producer,
    /// Works on productions they are staffed on.
    #[default]
    Crew,
}

impl TeamRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Producer => "producer",
            Self::Crew => "crew",
        }
    }
}

/// Error returned while parsing roles from persistence or caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown team role: {0}")]
pub struct ParseTeamRoleError(pub String);

impl TryFrom<&str> for TeamRole {
    type Error = ParseTeamRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "producer" => Ok(Self::Producer),
            "crew" => Ok(Self::Crew),
            _ => Err(ParseTeamRoleError(value.to_owned())),
        }
    }
}

/// The signed-in user a query runs on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// Identity-provider user id.
    pub user_id: UserId,
    /// Sign-in email, compared case-insensitively.
    pub email: String,
    /// Roster role.
    pub role: TeamRole,
}

impl Viewer {
    /// Creates a viewer.
    #[must_use]
    pub fn new(user_id: UserId, email: impl Into<String>, role: TeamRole) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }
}
