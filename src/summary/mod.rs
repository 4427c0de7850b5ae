//! AI-assisted project status summaries and task suggestions.
//!
//! Prompts are rendered from project state with `minijinja`; the text
//! generator itself is an opaque port ([`ports::TextGenerator`]).

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
