//! In-memory integration tests for driving projects through the pipeline.

use super::helpers::{TestCoordinator, complete_current_stage, coordinator};
use rstest::rstest;
use stagecraft::production::{
    domain::{Priority, ProductionDomainError, Stage, UserId},
    services::{AddTaskRequest, ChangeStageRequest, CoordinatorError, CreateProjectRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_advances_from_pitch_to_release(
    coordinator: TestCoordinator,
) -> Result<(), eyre::Report> {
    let project = coordinator
        .create_project(
            CreateProjectRequest::new("Feature documentary", UserId::new())
                .with_priority(Priority::High),
        )
        .await?;
    let mut current = project.clone();

    while let Some(next) = current.stage().next() {
        complete_current_stage(&coordinator, &current, &["Sign-off"]).await?;
        let previous_index = current.stage().index();
        current = coordinator.advance_stage(project.id()).await?;

        eyre::ensure!(current.stage() == next, "advance skipped a stage");
        eyre::ensure!(current.stage().index() == previous_index + 1);
        eyre::ensure!(current.progress() == next.canonical_progress());
    }

    eyre::ensure!(current.stage() == Stage::Released);
    eyre::ensure!(current.progress().value() == 100);
    eyre::ensure!(current.priority() == Priority::High);

    complete_current_stage(&coordinator, &current, &["Archive masters"]).await?;
    let result = coordinator.advance_stage(project.id()).await;
    eyre::ensure!(
        matches!(
            result,
            Err(CoordinatorError::Domain(ProductionDomainError::TerminalStage(_)))
        ),
        "expected terminal stage error, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn manual_progress_survives_until_next_stage_change(
    coordinator: TestCoordinator,
) -> Result<(), eyre::Report> {
    let project = coordinator
        .create_project(CreateProjectRequest::new("Album visuals", UserId::new()))
        .await?;
    coordinator
        .change_stage(ChangeStageRequest::for_stage(project.id(), Stage::Production))
        .await?;

    let tuned = coordinator.set_progress(project.id(), 72).await?;
    eyre::ensure!(tuned.stage() == Stage::Production);
    eyre::ensure!(tuned.progress().value() == 72);

    let task = coordinator
        .add_task(AddTaskRequest::new(project.id(), "Shoot B-roll"))
        .await?;
    coordinator.toggle_task_completion(task.id()).await?;
    let unchanged = coordinator
        .find_project(project.id())
        .await?
        .ok_or_else(|| eyre::eyre!("project missing"))?;
    eyre::ensure!(unchanged.progress().value() == 72);

    let advanced = coordinator.advance_stage(project.id()).await?;
    eyre::ensure!(advanced.stage() == Stage::PostProduction);
    eyre::ensure!(advanced.progress().value() == 85);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_accumulate_per_stage(coordinator: TestCoordinator) -> Result<(), eyre::Report> {
    let project = coordinator
        .create_project(CreateProjectRequest::new("Podcast season", UserId::new()))
        .await?;
    complete_current_stage(&coordinator, &project, &["Pitch call"]).await?;
    let advanced = coordinator.advance_stage(project.id()).await?;
    let discussion_task = coordinator
        .add_task(AddTaskRequest::new(project.id(), "Budget review"))
        .await?;

    let tasks = coordinator.list_tasks(project.id()).await?;
    eyre::ensure!(tasks.len() == 2);
    eyre::ensure!(discussion_task.stage() == advanced.stage());

    let eligibility = coordinator.advance_eligibility(project.id()).await?;
    eyre::ensure!(eligibility.stage == Stage::Discussion);
    eyre::ensure!(eligibility.total == 1);
    eyre::ensure!(!eligibility.is_eligible());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn team_changes_persist(coordinator: TestCoordinator) -> Result<(), eyre::Report> {
    let project = coordinator
        .create_project(CreateProjectRequest::new("Ad spot", UserId::new()))
        .await?;
    let editor = UserId::new();

    coordinator.add_team_member(project.id(), editor).await?;
    let stored = coordinator
        .find_project(project.id())
        .await?
        .ok_or_else(|| eyre::eyre!("project missing"))?;
    eyre::ensure!(stored.involves(editor));

    coordinator.remove_team_member(project.id(), editor).await?;
    let after_removal = coordinator
        .find_project(project.id())
        .await?
        .ok_or_else(|| eyre::eyre!("project missing"))?;
    eyre::ensure!(!after_removal.involves(editor));

    let reprioritised = coordinator.set_priority(project.id(), Priority::Low).await?;
    eyre::ensure!(reprioritised.priority() == Priority::Low);
    Ok(())
}
