//! Port contracts for summary generation.

pub mod generator;

pub use generator::{TextGenerationError, TextGenerator};

#[cfg(test)]
pub use generator::MockTextGenerator;
