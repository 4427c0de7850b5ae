//! In-memory adapter implementations.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! tests and embedding without a document store.

mod project;
mod task;

pub use project::InMemoryProjectRepository;
pub use task::InMemoryTaskRepository;

/// Wraps a poisoned-lock message as an I/O error for the persistence variant.
fn lock_error(err: &impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}
