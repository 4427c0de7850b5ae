//! Opaque text-generation port: prompt in, text out.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// AI text generation contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`TextGenerationError`] when the provider rejects the request
    /// or is unreachable.
    async fn generate(&self, prompt: &str) -> Result<String, TextGenerationError>;
}

/// Errors returned by text generator implementations.
#[derive(Debug, Clone, Error)]
pub enum TextGenerationError {
    /// The provider refused the prompt.
    #[error("text generation rejected: {0}")]
    Rejected(String),

    /// Transport or provider failure.
    #[error("text generation provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl TextGenerationError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
