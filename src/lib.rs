//! Stagecraft: production pipeline management for a media studio.
//!
//! This crate provides the rules that move a production project through its
//! lifecycle stages, keep its progress percentage in step with those stages,
//! and gate advancement on completion of stage-scoped tasks. Storage,
//! identity and AI text generation are external collaborators reached through
//! ports.
//!
//! # Architecture
//!
//! Stagecraft follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`production`]: Stages, progress, tasks and the stage-progress coordinator
//! - [`access`]: Admin policy and role-based project visibility
//! - [`summary`]: Generated status summaries and task suggestions
//! - [`config`]: Startup configuration

pub mod access;
pub mod config;
pub mod production;
pub mod summary;
