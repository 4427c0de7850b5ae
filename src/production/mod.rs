//! Production pipeline: project stages, progress and stage-scoped tasks.
//!
//! The [`services::StageProgressCoordinator`] owns the rules that tie a
//! project's lifecycle stage to its progress percentage and that gate
//! advancement on completion of the current stage's tasks. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
