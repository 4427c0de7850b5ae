//! Admin policy injected at startup.

use super::{TeamRole, Viewer};
use crate::production::domain::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Decides whether a viewer has studio-wide admin rights.
pub trait AdminPolicy: Send + Sync {
    /// Returns `true` when `viewer` is an administrator.
    fn is_admin(&self, viewer: &Viewer) -> bool;
}

/// Admin identities loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminIdentities {
    /// Admin sign-in emails.
    pub emails: Vec<String>,
    /// Admin user ids.
    pub user_ids: Vec<UserId>,
}

/// [`AdminPolicy`] backed by configured identities and the roster role.
///
/// A viewer is an admin when their role is [`TeamRole::Admin`], their user id
/// is listed, or their email matches a listed email ignoring case and
/// surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredAdminPolicy {
    emails: BTreeSet<String>,
    user_ids: BTreeSet<UserId>,
}

impl ConfiguredAdminPolicy {
    /// Builds the policy from configured identities.
    #[must_use]
    pub fn new(identities: &AdminIdentities) -> Self {
        Self {
            emails: identities
                .emails
                .iter()
                .map(|email| normalize_email(email))
                .filter(|email| !email.is_empty())
                .collect(),
            user_ids: identities.user_ids.iter().copied().collect(),
        }
    }
}

impl AdminPolicy for ConfiguredAdminPolicy {
    fn is_admin(&self, viewer: &Viewer) -> bool {
        viewer.role == TeamRole::Admin
            || self.user_ids.contains(&viewer.user_id)
            || self.emails.contains(&normalize_email(&viewer.email))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
