//! Prompt rendering and response parsing for summaries.

mod config;
mod error;
mod prompt;
mod suggestions;

pub use config::SummaryConfig;
pub use error::StatusSummaryError;
pub use prompt::{
    DEFAULT_STATUS_TEMPLATE, DEFAULT_SUGGESTION_TEMPLATE, PromptKind, build_prompt_context,
    render_prompt,
};
pub use suggestions::parse_suggestions;
