//! Application services for the production pipeline.

mod coordinator;

pub use coordinator::{
    AddTaskRequest, ChangeStageRequest, CoordinatorError, CoordinatorResult, CreateProjectRequest,
    StageProgressCoordinator,
};
