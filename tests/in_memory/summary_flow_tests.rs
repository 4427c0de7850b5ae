//! In-memory integration tests for summaries built from stored projects.

use super::helpers::{TestCoordinator, coordinator};
use async_trait::async_trait;
use rstest::rstest;
use stagecraft::production::{
    domain::{Stage, UserId},
    services::{AddTaskRequest, ChangeStageRequest, CreateProjectRequest},
};
use stagecraft::summary::{
    ports::{TextGenerationError, TextGenerator},
    services::StatusSummaryService,
};
use std::sync::{Arc, Mutex};

/// Generator that replies with a fixed text and remembers each prompt.
struct ScriptedGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_owned(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn last_prompt(&self) -> Option<String> {
        self.prompts
            .lock()
            .ok()
            .and_then(|prompts| prompts.last().cloned())
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, TextGenerationError> {
        self.prompts
            .lock()
            .map_err(|err| TextGenerationError::Rejected(err.to_string()))?
            .push(prompt.to_owned());
        Ok(self.reply.clone())
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summary_prompt_reflects_stored_state(
    coordinator: TestCoordinator,
) -> Result<(), eyre::Report> {
    let project = coordinator
        .create_project(CreateProjectRequest::new("Nature series", UserId::new()))
        .await?;
    coordinator
        .change_stage(ChangeStageRequest::for_stage(project.id(), Stage::PreProduction))
        .await?;
    coordinator
        .add_task(AddTaskRequest::new(project.id(), "Scout locations"))
        .await?;
    let stored = coordinator
        .find_project(project.id())
        .await?
        .ok_or_else(|| eyre::eyre!("project missing"))?;
    let tasks = coordinator.list_tasks(project.id()).await?;

    let generator = Arc::new(ScriptedGenerator::new("  On track for production.  "));
    let service = StatusSummaryService::new(Arc::clone(&generator));
    let summary = service.summarize(&stored, &tasks).await?;

    eyre::ensure!(summary.stage == Stage::PreProduction);
    eyre::ensure!(summary.text == "On track for production.");
    let prompt = generator
        .last_prompt()
        .ok_or_else(|| eyre::eyre!("no prompt recorded"))?;
    eyre::ensure!(prompt.contains("Nature series"));
    eyre::ensure!(prompt.contains("Pre-Production (35% complete)"));
    eyre::ensure!(prompt.contains("- Scout locations"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn suggestions_skip_planned_tasks(coordinator: TestCoordinator) -> Result<(), eyre::Report> {
    let project = coordinator
        .create_project(CreateProjectRequest::new("Launch campaign", UserId::new()))
        .await?;
    coordinator
        .add_task(AddTaskRequest::new(project.id(), "Draft logline"))
        .await?;
    let tasks = coordinator.list_tasks(project.id()).await?;

    let generator = Arc::new(ScriptedGenerator::new(
        "1. Draft logline\n2. Build mood board\n- Book pitch meeting\n",
    ));
    let service = StatusSummaryService::new(generator);
    let suggestions = service.suggest_tasks(&project, &tasks).await?;

    eyre::ensure!(
        suggestions == vec!["Build mood board".to_owned(), "Book pitch meeting".to_owned()],
        "unexpected suggestions: {suggestions:?}"
    );
    Ok(())
}
