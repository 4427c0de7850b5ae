//! Error types for summary generation.

use crate::summary::ports::TextGenerationError;
use thiserror::Error;

/// Errors returned while producing summaries or suggestions.
#[derive(Debug, Error)]
pub enum StatusSummaryError {
    /// Prompt template rendering failed.
    #[error("prompt rendering failed for {kind} prompt: {reason}")]
    TemplateRender {
        /// Prompt being rendered.
        kind: &'static str,
        /// Rendering failure reason.
        reason: String,
    },

    /// The text generator failed.
    #[error(transparent)]
    Generation(#[from] TextGenerationError),

    /// The text generator returned nothing usable.
    #[error("text generator returned an empty response")]
    EmptyResponse,
}
