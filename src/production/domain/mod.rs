//! Domain model for the production pipeline.
//!
//! A project moves through a fixed, ordered set of stages. Entering a stage
//! resets the project's progress to that stage's canonical percentage, and
//! leaving a stage by advancement requires every task scoped to it to be
//! completed. Everything here is pure: no storage, no clocks beyond the
//! injected [`mockable::Clock`].

mod eligibility;
mod error;
mod ids;
mod policy;
mod priority;
mod progress;
mod project;
mod stage;
mod task;

pub use eligibility::AdvanceEligibility;
pub use error::{ParsePriorityError, ParseStageError, ProductionDomainError};
pub use ids::{ProjectId, TaskId, UserId};
pub use policy::{LifecyclePolicy, ProgressPolicy};
pub use priority::Priority;
pub use progress::Progress;
pub use project::{PersistedProjectData, Project};
pub use stage::Stage;
pub use task::{PersistedTaskData, Task};
