//! Domain model for viewers, roles and project visibility.

mod policy;
mod viewer;
mod visibility;

pub use policy::{AdminIdentities, AdminPolicy, ConfiguredAdminPolicy};
pub use viewer::{ParseTeamRoleError, TeamRole, Viewer};
pub use visibility::ProjectVisibility;
