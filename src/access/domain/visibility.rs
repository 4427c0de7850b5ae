//! Role-based filtering of project query results.

use super::{AdminPolicy, TeamRole, Viewer};
use crate::production::domain::Project;

/// Narrows project listings to what a viewer may see.
///
/// Admins and producers see everything. Crew see the projects they own or
/// are staffed on.
#[derive(Debug, Clone)]
pub struct ProjectVisibility<A>
where
    A: AdminPolicy,
{
    policy: A,
}

impl<A> ProjectVisibility<A>
where
    A: AdminPolicy,
{
    /// Creates a visibility filter around an admin policy.
    #[must_use]
    pub const fn new(policy: A) -> Self {
        Self { policy }
    }

    /// Returns `true` when `viewer` may see every project.
    #[must_use]
    pub fn sees_everything(&self, viewer: &Viewer) -> bool {
        viewer.role == TeamRole::Producer || self.policy.is_admin(viewer)
    }

    /// Returns `true` when `viewer` may see `project`.
    #[must_use]
    pub fn can_view(&self, viewer: &Viewer, project: &Project) -> bool {
        self.sees_everything(viewer) || project.involves(viewer.user_id)
    }

    /// Keeps only the projects `viewer` may see, preserving order.
    #[must_use]
    pub fn filter(&self, viewer: &Viewer, projects: Vec<Project>) -> Vec<Project> {
        if self.sees_everything(viewer) {
            return projects;
        }
        projects
            .into_iter()
            .filter(|project| project.involves(viewer.user_id))
            .collect()
    }
}
