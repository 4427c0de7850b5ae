//! Project aggregate root and the stage-progress coupling rules.

use super::{
    AdvanceEligibility, LifecyclePolicy, Priority, ProductionDomainError, Progress, ProjectId,
    Stage, Task, UserId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Production project aggregate root.
///
/// `progress` matches [`Stage::canonical_progress`] only immediately after a
/// stage change. Manual edits through [`Project::set_progress`] may move it
/// anywhere in `0..=100` without touching the stage.
///
/// Deserialization goes through [`PersistedProjectData`] and rejects blank
/// titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedProjectData")]
pub struct Project {
    id: ProjectId,
    title: String,
    owner: UserId,
    team: Vec<UserId>,
    priority: Priority,
    stage: Stage,
    progress: Progress,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted owner.
    pub owner: UserId,
    /// Persisted team roster.
    pub team: Vec<UserId>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted lifecycle stage.
    pub stage: Stage,
    /// Persisted progress.
    pub progress: Progress,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a project at [`Stage::Pitch`] with zero progress.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionDomainError::EmptyProjectTitle`] when the title is
    /// blank.
    pub fn new(
        title: impl Into<String>,
        owner: UserId,
        clock: &impl Clock,
    ) -> Result<Self, ProductionDomainError> {
        let normalized = normalized_title(title.into())
            .ok_or(ProductionDomainError::EmptyProjectTitle)?;
        let timestamp = clock.utc();
        Ok(Self {
            id: ProjectId::new(),
            title: normalized,
            owner,
            team: Vec::new(),
            priority: Priority::default(),
            stage: Stage::Pitch,
            progress: Progress::ZERO,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Overrides the initial stage and progress of a freshly created project.
    #[must_use]
    pub fn starting_at(mut self, stage: Stage, progress: Progress) -> Self {
        self.stage = stage;
        self.progress = progress;
        self
    }

    /// Sets the initial priority of a freshly created project.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial team of a freshly created project.
    #[must_use]
    pub fn with_team(mut self, team: impl IntoIterator<Item = UserId>) -> Self {
        for member in team {
            self.push_member(member);
        }
        self
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            owner: data.owner,
            team: data.team,
            priority: data.priority,
            stage: data.stage,
            progress: data.progress,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the team roster, excluding the owner.
    #[must_use]
    pub fn team(&self) -> &[UserId] {
        &self.team
    }

    /// Returns the project priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the current lifecycle stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the current progress.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
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

    /// Returns `true` when `user` owns the project or is on its team.
    #[must_use]
    pub fn involves(&self, user: UserId) -> bool {
        self.owner == user || self.team.contains(&user)
    }

    /// Moves the project to `stage` and resets progress to the stage's
    /// canonical value, discarding any manual progress edit.
    ///
    /// Re-entering the current stage is allowed and only resets progress.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionDomainError::BackwardTransition`] when `stage`
    /// precedes the current stage and the policy forbids backward moves. The
    /// project is left unchanged.
    pub fn change_stage(
        &mut self,
        stage: Stage,
        policy: &LifecyclePolicy,
        clock: &impl Clock,
    ) -> Result<(), ProductionDomainError> {
        if stage < self.stage && !policy.allow_backward_transitions {
            return Err(ProductionDomainError::BackwardTransition {
                project_id: self.id,
                from: self.stage,
                to: stage,
            });
        }
        self.enter_stage(stage, clock);
        Ok(())
    }

    /// Overwrites progress without touching the stage.
    pub fn set_progress(&mut self, progress: Progress, clock: &impl Clock) {
        self.progress = progress;
        self.touch(clock);
    }

    /// Sets the project priority.
    pub fn set_priority(&mut self, priority: Priority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Adds a user to the team. Returns `false` when they were already
    /// involved.
    pub fn add_team_member(&mut self, user: UserId, clock: &impl Clock) -> bool {
        let added = self.push_member(user);
        if added {
            self.touch(clock);
        }
        added
    }

    /// Removes a user from the team. Returns `false` when they were not on
    /// it. The owner cannot be removed this way.
    pub fn remove_team_member(&mut self, user: UserId, clock: &impl Clock) -> bool {
        let before = self.team.len();
        self.team.retain(|member| *member != user);
        let removed = self.team.len() != before;
        if removed {
            self.touch(clock);
        }
        removed
    }

    /// Computes advancement gating against the project's tasks.
    #[must_use]
    pub fn eligibility(&self, tasks: &[Task]) -> AdvanceEligibility {
        AdvanceEligibility::evaluate(self, tasks)
    }

    /// Advances one stage forward when every current-stage task is completed.
    ///
    /// Returns the stage entered.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionDomainError::TerminalStage`] when the project is
    /// already released and [`ProductionDomainError::NotEligible`] when the
    /// current stage has open tasks or none at all. The project is left
    /// unchanged in both cases.
    pub fn advance(
        &mut self,
        tasks: &[Task],
        clock: &impl Clock,
    ) -> Result<Stage, ProductionDomainError> {
        let eligibility = self.eligibility(tasks);
        let next = eligibility
            .next_stage
            .ok_or(ProductionDomainError::TerminalStage(self.id))?;
        if !eligibility.is_eligible() {
            return Err(ProductionDomainError::NotEligible {
                project_id: self.id,
                stage: eligibility.stage,
                total: eligibility.total,
                completed: eligibility.completed,
            });
        }
        self.enter_stage(next, clock);
        Ok(next)
    }

    fn enter_stage(&mut self, stage: Stage, clock: &impl Clock) {
        self.stage = stage;
        self.progress = stage.canonical_progress();
        self.touch(clock);
    }

    fn push_member(&mut self, user: UserId) -> bool {
        if self.involves(user) {
            return false;
        }
        self.team.push(user);
        true
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl TryFrom<PersistedProjectData> for Project {
    type Error = ProductionDomainError;

    fn try_from(data: PersistedProjectData) -> Result<Self, Self::Error> {
        let title =
            normalized_title(data.title).ok_or(ProductionDomainError::EmptyProjectTitle)?;
        Ok(Self::from_persisted(PersistedProjectData { title, ..data }))
    }
}

/// Trims a title, returning `None` when nothing is left.
pub(super) fn normalized_title(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == raw.len() {
        Some(raw)
    } else {
        Some(trimmed.to_owned())
    }
}
