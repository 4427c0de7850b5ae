//! Stage-scoped task entity.

use super::{ProductionDomainError, Project, ProjectId, Stage, TaskId, UserId, project};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work scoped to exactly one stage of one project.
///
/// Studio staff also call these phases or objectives. Deserialization goes
/// through [`PersistedTaskData`] and rejects blank titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedTaskData")]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    stage: Stage,
    completed: bool,
    assignee: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Stage the task is scoped to.
    pub stage: Stage,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted assignee, if any.
    pub assignee: Option<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates an open task scoped to the project's current stage.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionDomainError::EmptyTaskTitle`] when the title is
    /// blank.
    pub fn new(
        project: &Project,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, ProductionDomainError> {
        let normalized =
            project::normalized_title(title.into()).ok_or(ProductionDomainError::EmptyTaskTitle)?;
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            project_id: project.id(),
            title: normalized,
            stage: project.stage(),
            completed: false,
            assignee: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Scopes a freshly created task to `stage` instead of the project's
    /// current stage.
    #[must_use]
    pub fn in_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    /// Assigns a freshly created task.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            stage: data.stage,
            completed: data.completed,
            assignee: data.assignee,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the stage this task is scoped to.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the task gates the project's current stage.
    #[must_use]
    pub fn is_active_for(&self, project: &Project) -> bool {
        self.project_id == project.id() && self.stage == project.stage()
    }

    /// Flips the completion flag and returns the new value.
    ///
    /// Never touches the owning project: advancement stays a separate,
    /// explicit operation.
    pub fn toggle_completion(&mut self, clock: &impl Clock) -> bool {
        self.completed = !self.completed;
        self.touch(clock);
        self.completed
    }

    /// Moves the task to another stage, keeping its completion flag.
    pub fn reassign_stage(&mut self, stage: Stage, clock: &impl Clock) {
        self.stage = stage;
        self.touch(clock);
    }

    /// Sets or clears the assignee.
    pub fn assign_to(&mut self, assignee: Option<UserId>, clock: &impl Clock) {
        self.assignee = assignee;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl TryFrom<PersistedTaskData> for Task {
    type Error = ProductionDomainError;

    fn try_from(data: PersistedTaskData) -> Result<Self, Self::Error> {
        let title = project::normalized_title(data.title)
            .ok_or(ProductionDomainError::EmptyTaskTitle)?;
        Ok(Self::from_persisted(PersistedTaskData { title, ..data }))
    }
}
