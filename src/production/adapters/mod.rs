//! Persistence adapters for the production pipeline.
//!
//! - [`memory::InMemoryProjectRepository`] and
//!   [`memory::InMemoryTaskRepository`]: thread-safe in-memory storage used by
//!   tests and single-process embedding.

pub mod memory;
