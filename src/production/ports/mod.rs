//! Port contracts for the production pipeline.
//!
//! Ports define infrastructure-agnostic interfaces used by production
//! services. The document store behind them is an external collaborator.

pub mod repository;

pub use repository::{
    ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, TaskRepository,
    TaskRepositoryError, TaskRepositoryResult,
};
