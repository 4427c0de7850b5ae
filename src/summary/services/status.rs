//! Status summary and task suggestion service.

use crate::production::domain::{Project, ProjectId, Stage, Task};
use crate::summary::{
    domain::{PromptKind, StatusSummaryError, SummaryConfig, parse_suggestions, render_prompt},
    ports::TextGenerator,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Generated status update for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    /// Project summarised.
    pub project_id: ProjectId,
    /// Stage at generation time.
    pub stage: Stage,
    /// Generated text, trimmed.
    pub text: String,
}

/// Produces status summaries and task suggestions through a text generator.
#[derive(Clone)]
pub struct StatusSummaryService<G>
where
    G: TextGenerator,
{
    generator: Arc<G>,
    config: SummaryConfig,
}

impl<G> StatusSummaryService<G>
where
    G: TextGenerator,
{
    /// Creates a service with default configuration.
    #[must_use]
    pub fn new(generator: Arc<G>) -> Self {
        Self::with_config(generator, SummaryConfig::default())
    }

    /// Creates a service with custom configuration.
    #[must_use]
    pub const fn with_config(generator: Arc<G>, config: SummaryConfig) -> Self {
        Self { generator, config }
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &SummaryConfig {
        &self.config
    }

    async fn generate(
        &self,
        kind: PromptKind,
        project: &Project,
        tasks: &[Task],
    ) -> Result<String, StatusSummaryError> {
        let prompt = render_prompt(kind, project, tasks, &self.config)?;
        debug!(project_id = %project.id(), kind = kind.as_str(), "requesting generated text");
        self.generator.generate(&prompt).await.map_err(|err| {
            warn!(project_id = %project.id(), kind = kind.as_str(), error = %err, "text generation failed");
            StatusSummaryError::from(err)
        })
    }

    /// Summarises a project's current stage, progress and open work.
    ///
    /// # Errors
    ///
    /// Returns [`StatusSummaryError`] when rendering or generation fails, or
    /// the generator returns only whitespace.
    pub async fn summarize(
        &self,
        project: &Project,
        tasks: &[Task],
    ) -> Result<StatusSummary, StatusSummaryError> {
        let raw = self.generate(PromptKind::Status, project, tasks).await?;
        let text = raw.trim();
        if text.is_empty() {
            return Err(StatusSummaryError::EmptyResponse);
        }
        Ok(StatusSummary {
            project_id: project.id(),
            stage: project.stage(),
            text: text.to_owned(),
        })
    }

    /// Suggests new task titles for the project's current stage.
    ///
    /// Titles already planned for the project are filtered out. An empty
    /// list is a valid answer.
    ///
    /// # Errors
    ///
    /// Returns [`StatusSummaryError`] when rendering or generation fails.
    pub async fn suggest_tasks(
        &self,
        project: &Project,
        tasks: &[Task],
    ) -> Result<Vec<String>, StatusSummaryError> {
        let raw = self
            .generate(PromptKind::Suggestions, project, tasks)
            .await?;
        let existing = tasks
            .iter()
            .filter(|task| task.project_id() == project.id())
            .map(Task::title);
        Ok(parse_suggestions(&raw, existing, self.config.max_suggestions))
    }
}
