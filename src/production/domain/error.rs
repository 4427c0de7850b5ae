//! Error types for production domain validation and parsing.

use super::{ProjectId, Stage};
use thiserror::Error;

/// Errors returned by production domain rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductionDomainError {
    /// The project title is empty after trimming.
    #[error("project title must not be empty")]
    EmptyProjectTitle,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// A progress value fell outside `0..=100`.
    #[error("progress {0} is outside the range 0..=100")]
    ProgressOutOfRange(i64),

    /// The lifecycle policy forbids moving to an earlier stage.
    #[error("project {project_id} cannot move back from {from} to {to}")]
    BackwardTransition {
        /// Project being changed.
        project_id: ProjectId,
        /// Current stage.
        from: Stage,
        /// Requested stage.
        to: Stage,
    },

    /// The project is already at the terminal stage.
    #[error("project {0} is already released")]
    TerminalStage(ProjectId),

    /// The current stage still has open work, or none defined.
    #[error(
        "project {project_id} is not eligible to leave {stage}: {completed} of {total} tasks completed"
    )]
    NotEligible {
        /// Project being advanced.
        project_id: ProjectId,
        /// Current stage.
        stage: Stage,
        /// Number of current-stage tasks.
        total: usize,
        /// Number of completed current-stage tasks.
        completed: usize,
    },
}

/// Error returned while parsing stages from persistence or caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown production stage: {0}")]
pub struct ParseStageError(pub String);

/// Error returned while parsing priorities from persistence or caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project priority: {0}")]
pub struct ParsePriorityError(pub String);
