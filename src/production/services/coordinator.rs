//! Service layer coupling project stages, progress and task gating.

use crate::production::{
    domain::{
        AdvanceEligibility, LifecyclePolicy, ParseStageError, Priority, ProductionDomainError,
        Progress, Project, ProjectId, Stage, Task, TaskId, UserId,
    },
    ports::{ProjectRepository, ProjectRepositoryError, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    title: String,
    owner: UserId,
    priority: Priority,
    initial_stage: Option<Stage>,
    initial_progress: Option<i64>,
    team: Vec<UserId>,
}

impl CreateProjectRequest {
    /// Creates a request with required project fields.
    #[must_use]
    pub fn new(title: impl Into<String>, owner: UserId) -> Self {
        Self {
            title: title.into(),
            owner,
            priority: Priority::default(),
            initial_stage: None,
            initial_progress: None,
            team: Vec::new(),
        }
    }

    /// Sets project priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Starts the project at a stage other than [`Stage::Pitch`].
    ///
    /// Progress stays at zero unless [`Self::with_initial_progress`] is also
    /// given.
    #[must_use]
    pub const fn with_initial_stage(mut self, stage: Stage) -> Self {
        self.initial_stage = Some(stage);
        self
    }

    /// Starts the project with a non-zero progress value.
    #[must_use]
    pub const fn with_initial_progress(mut self, progress: i64) -> Self {
        self.initial_progress = Some(progress);
        self
    }

    /// Sets the initial team roster.
    #[must_use]
    pub fn with_team(mut self, team: impl IntoIterator<Item = UserId>) -> Self {
        self.team = team.into_iter().collect();
        self
    }
}

/// Request payload for an explicit stage change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStageRequest {
    project_id: ProjectId,
    stage: String,
}

impl ChangeStageRequest {
    /// Creates a request from a raw stage literal, parsed by the service.
    #[must_use]
    pub fn new(project_id: ProjectId, stage: impl Into<String>) -> Self {
        Self {
            project_id,
            stage: stage.into(),
        }
    }

    /// Creates a request from an already typed stage.
    #[must_use]
    pub fn for_stage(project_id: ProjectId, stage: Stage) -> Self {
        Self::new(project_id, stage.as_str())
    }
}

/// Request payload for adding a task to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    project_id: ProjectId,
    title: String,
    stage: Option<Stage>,
    assignee: Option<UserId>,
}

impl AddTaskRequest {
    /// Creates a request for a task in the project's current stage.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            stage: None,
            assignee: None,
        }
    }

    /// Scopes the task to an explicit stage.
    #[must_use]
    pub const fn in_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Assigns the task on creation.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }
}

/// Service-level errors for coordinator operations.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// A domain rule rejected the operation.
    #[error(transparent)]
    Domain(#[from] ProductionDomainError),
    /// The requested stage literal is not a pipeline stage.
    #[error(transparent)]
    InvalidStage(#[from] ParseStageError),
    /// Project persistence failed.
    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),
    /// Task persistence failed.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),
    /// No project exists with the given identifier.
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),
}

/// Result type for coordinator operations.
pub type CoordinatorResult<T> = Result<T, CoordinatorError>;

/// Stage-progress coordinator.
///
/// Holds no state of its own between calls: every operation loads the
/// current records, applies the domain rules and writes the result back. The
/// write is not transactional with the computation, and concurrent callers
/// race with last-write-wins semantics.
#[derive(Clone)]
pub struct StageProgressCoordinator<P, T, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    clock: Arc<C>,
    policy: LifecyclePolicy,
}

impl<P, T, C> StageProgressCoordinator<P, T, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a coordinator with the default lifecycle policy.
    #[must_use]
    pub fn new(projects: Arc<P>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            projects,
            tasks,
            clock,
            policy: LifecyclePolicy::default(),
        }
    }

    /// Replaces the lifecycle policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: LifecyclePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the lifecycle policy in force.
    #[must_use]
    pub const fn policy(&self) -> &LifecyclePolicy {
        &self.policy
    }

    async fn find_project_or_error(&self, project_id: ProjectId) -> CoordinatorResult<Project> {
        self.projects
            .find_by_id(project_id)
            .await?
            .ok_or(CoordinatorError::ProjectNotFound(project_id))
    }

    async fn find_task_or_error(&self, task_id: TaskId) -> CoordinatorResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(CoordinatorError::TaskNotFound(task_id))
    }

    async fn persist_project(&self, project: &Project) -> CoordinatorResult<()> {
        if let Err(err) = self.projects.update(project).await {
            warn!(project_id = %project.id(), error = %err, "project write failed");
            return Err(err.into());
        }
        Ok(())
    }

    async fn persist_task(&self, task: &Task) -> CoordinatorResult<()> {
        if let Err(err) = self.tasks.update(task).await {
            warn!(task_id = %task.id(), error = %err, "task write failed");
            return Err(err.into());
        }
        Ok(())
    }

    /// Creates a project, at [`Stage::Pitch`] with zero progress unless the
    /// request overrides either.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::Domain`] when the title is blank or the
    /// initial progress is rejected by the policy, and repository errors when
    /// persistence fails.
    pub async fn create_project(&self, request: CreateProjectRequest) -> CoordinatorResult<Project> {
        let progress = match request.initial_progress {
            Some(value) => self.policy.progress.apply(value)?,
            None => Progress::ZERO,
        };
        let stage = request.initial_stage.unwrap_or(Stage::Pitch);
        let project = Project::new(request.title, request.owner, &*self.clock)?
            .starting_at(stage, progress)
            .with_priority(request.priority)
            .with_team(request.team);
        self.projects.store(&project).await?;
        info!(project_id = %project.id(), stage = %project.stage(), "project created");
        Ok(project)
    }

    /// Retrieves a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::ProjectRepository`] when lookup fails.
    pub async fn find_project(&self, project_id: ProjectId) -> CoordinatorResult<Option<Project>> {
        Ok(self.projects.find_by_id(project_id).await?)
    }

    /// Lists every project, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::ProjectRepository`] when lookup fails.
    pub async fn list_projects(&self) -> CoordinatorResult<Vec<Project>> {
        Ok(self.projects.list_all().await?)
    }

    /// Moves a project to the requested stage and resets its progress to the
    /// stage's canonical value.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::InvalidStage`] for unknown stage literals,
    /// [`CoordinatorError::ProjectNotFound`] when the project is missing,
    /// [`CoordinatorError::Domain`] when the policy forbids a backward move,
    /// and repository errors when persistence fails.
    pub async fn change_stage(&self, request: ChangeStageRequest) -> CoordinatorResult<Project> {
        let stage = Stage::try_from(request.stage.as_str())?;
        let mut project = self.find_project_or_error(request.project_id).await?;
        let from = project.stage();
        project.change_stage(stage, &self.policy, &*self.clock)?;
        self.persist_project(&project).await?;
        info!(
            project_id = %project.id(),
            %from,
            to = %stage,
            progress = project.progress().value(),
            "project stage changed"
        );
        Ok(project)
    }

    /// Overwrites a project's progress, leaving its stage alone.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::Domain`] when the value is outside
    /// `0..=100` under [`crate::production::domain::ProgressPolicy::Reject`],
    /// [`CoordinatorError::ProjectNotFound`] when the project is missing, and
    /// repository errors when persistence fails.
    pub async fn set_progress(
        &self,
        project_id: ProjectId,
        value: i64,
    ) -> CoordinatorResult<Project> {
        let progress = self.policy.progress.apply(value)?;
        let mut project = self.find_project_or_error(project_id).await?;
        project.set_progress(progress, &*self.clock);
        self.persist_project(&project).await?;
        debug!(project_id = %project_id, progress = progress.value(), "project progress set");
        Ok(project)
    }

    /// Computes whether a project may advance to its next stage.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::ProjectNotFound`] when the project is
    /// missing and repository errors when lookup fails.
    pub async fn advance_eligibility(
        &self,
        project_id: ProjectId,
    ) -> CoordinatorResult<AdvanceEligibility> {
        let project = self.find_project_or_error(project_id).await?;
        let tasks = self.tasks.list_for_project(project_id).await?;
        let eligibility = project.eligibility(&tasks);
        debug!(
            project_id = %project_id,
            stage = %eligibility.stage,
            total = eligibility.total,
            completed = eligibility.completed,
            eligible = eligibility.is_eligible(),
            "advance eligibility computed"
        );
        Ok(eligibility)
    }

    /// Advances a project by one stage once every current-stage task is
    /// completed.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::Domain`] wrapping
    /// [`ProductionDomainError::TerminalStage`] or
    /// [`ProductionDomainError::NotEligible`] when the precondition fails,
    /// [`CoordinatorError::ProjectNotFound`] when the project is missing, and
    /// repository errors when persistence fails.
    pub async fn advance_stage(&self, project_id: ProjectId) -> CoordinatorResult<Project> {
        let mut project = self.find_project_or_error(project_id).await?;
        let tasks = self.tasks.list_for_project(project_id).await?;
        let from = project.stage();
        let entered = project.advance(&tasks, &*self.clock).inspect_err(|err| {
            warn!(project_id = %project_id, stage = %from, reason = %err, "advance rejected");
        })?;
        self.persist_project(&project).await?;
        info!(project_id = %project_id, %from, to = %entered, "project advanced");
        Ok(project)
    }

    /// Sets a project's priority.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::ProjectNotFound`] when the project is
    /// missing and repository errors when persistence fails.
    pub async fn set_priority(
        &self,
        project_id: ProjectId,
        priority: Priority,
    ) -> CoordinatorResult<Project> {
        let mut project = self.find_project_or_error(project_id).await?;
        project.set_priority(priority, &*self.clock);
        self.persist_project(&project).await?;
        Ok(project)
    }

    /// Adds a user to a project's team. Already-involved users are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::ProjectNotFound`] when the project is
    /// missing and repository errors when persistence fails.
    pub async fn add_team_member(
        &self,
        project_id: ProjectId,
        user: UserId,
    ) -> CoordinatorResult<Project> {
        let mut project = self.find_project_or_error(project_id).await?;
        if project.add_team_member(user, &*self.clock) {
            self.persist_project(&project).await?;
        }
        Ok(project)
    }

    /// Removes a user from a project's team. Non-members are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::ProjectNotFound`] when the project is
    /// missing and repository errors when persistence fails.
    pub async fn remove_team_member(
        &self,
        project_id: ProjectId,
        user: UserId,
    ) -> CoordinatorResult<Project> {
        let mut project = self.find_project_or_error(project_id).await?;
        if project.remove_team_member(user, &*self.clock) {
            self.persist_project(&project).await?;
        }
        Ok(project)
    }

    /// Adds a task, scoped to the project's current stage unless the request
    /// names one.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::Domain`] when the title is blank,
    /// [`CoordinatorError::ProjectNotFound`] when the project is missing, and
    /// repository errors when persistence fails.
    pub async fn add_task(&self, request: AddTaskRequest) -> CoordinatorResult<Task> {
        let project = self.find_project_or_error(request.project_id).await?;
        let mut task = Task::new(&project, request.title, &*self.clock)?;
        if let Some(stage) = request.stage {
            task = task.in_stage(stage);
        }
        if let Some(assignee) = request.assignee {
            task = task.with_assignee(assignee);
        }
        self.tasks.store(&task).await?;
        debug!(task_id = %task.id(), project_id = %project.id(), stage = %task.stage(), "task added");
        Ok(task)
    }

    /// Lists every task of a project across all stages.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::TaskRepository`] when lookup fails.
    pub async fn list_tasks(&self, project_id: ProjectId) -> CoordinatorResult<Vec<Task>> {
        Ok(self.tasks.list_for_project(project_id).await?)
    }

    /// Flips a task's completion flag.
    ///
    /// The owning project is never read or written; callers learn about
    /// advancement through [`Self::advance_eligibility`].
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::TaskNotFound`] when the task is missing
    /// and repository errors when persistence fails.
    pub async fn toggle_task_completion(&self, task_id: TaskId) -> CoordinatorResult<Task> {
        let mut task = self.find_task_or_error(task_id).await?;
        let completed = task.toggle_completion(&*self.clock);
        self.persist_task(&task).await?;
        debug!(task_id = %task_id, completed, "task completion toggled");
        Ok(task)
    }

    /// Moves a task to another stage.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::TaskNotFound`] when the task is missing
    /// and repository errors when persistence fails.
    pub async fn reassign_task_stage(
        &self,
        task_id: TaskId,
        stage: Stage,
    ) -> CoordinatorResult<Task> {
        let mut task = self.find_task_or_error(task_id).await?;
        task.reassign_stage(stage, &*self.clock);
        self.persist_task(&task).await?;
        Ok(task)
    }

    /// Sets or clears a task's assignee.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::TaskNotFound`] when the task is missing
    /// and repository errors when persistence fails.
    pub async fn assign_task(
        &self,
        task_id: TaskId,
        assignee: Option<UserId>,
    ) -> CoordinatorResult<Task> {
        let mut task = self.find_task_or_error(task_id).await?;
        task.assign_to(assignee, &*self.clock);
        self.persist_task(&task).await?;
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::TaskRepository`] wrapping
    /// [`TaskRepositoryError::NotFound`] when the task is missing.
    pub async fn delete_task(&self, task_id: TaskId) -> CoordinatorResult<()> {
        self.tasks.delete(task_id).await?;
        debug!(task_id = %task_id, "task deleted");
        Ok(())
    }
}
