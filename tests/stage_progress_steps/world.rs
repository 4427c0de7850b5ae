//! Shared world state for stage progress BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use stagecraft::production::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTaskRepository},
    domain::{AdvanceEligibility, LifecyclePolicy, Project, Task},
    services::{CoordinatorError, StageProgressCoordinator},
};

/// Coordinator type used by the BDD world.
pub type TestCoordinator =
    StageProgressCoordinator<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>;

/// Scenario world for stage progress behaviour tests.
pub struct StageProgressWorld {
    pub coordinator: TestCoordinator,
    pub project: Option<Project>,
    pub tasks: HashMap<String, Task>,
    pub last_eligibility: Option<AdvanceEligibility>,
    pub last_result: Option<Result<Project, CoordinatorError>>,
}

impl StageProgressWorld {
    /// Creates a world around a coordinator using `policy`.
    #[must_use]
    pub fn with_policy(policy: LifecyclePolicy) -> Self {
        let coordinator = StageProgressCoordinator::new(
            Arc::new(InMemoryProjectRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        )
        .with_policy(policy);

        Self {
            coordinator,
            project: None,
            tasks: HashMap::new(),
            last_eligibility: None,
            last_result: None,
        }
    }

    /// Returns the scenario's project.
    ///
    /// # Errors
    ///
    /// Returns an error when no project has been created yet.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns a task created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has the given title.
    pub fn task(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.tasks
            .get(title)
            .ok_or_else(|| eyre::eyre!("missing task {title:?} in scenario world"))
    }

    /// Records the outcome of a project-mutating operation.
    pub fn record(&mut self, result: Result<Project, CoordinatorError>) {
        if let Ok(ref updated) = result {
            self.project = Some(updated.clone());
        }
        self.last_result = Some(result);
    }
}

impl Default for StageProgressWorld {
    fn default() -> Self {
        Self::with_policy(LifecyclePolicy::default())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StageProgressWorld {
    StageProgressWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
