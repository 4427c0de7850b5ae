//! Then steps for stage progress BDD scenarios.

use super::world::{StageProgressWorld, run_async};
use rstest_bdd_macros::then;
use stagecraft::production::{
    domain::{ProductionDomainError, Project, Stage},
    services::CoordinatorError,
};

fn last_error(world: &StageProgressWorld) -> Result<&CoordinatorError, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) => Ok(err),
        Some(Ok(project)) => Err(eyre::eyre!(
            "expected the operation to fail, project is now at {}",
            project.stage()
        )),
        None => Err(eyre::eyre!("missing operation result")),
    }
}

fn stored_project(world: &StageProgressWorld) -> Result<Project, eyre::Report> {
    let project_id = world.project()?.id();
    run_async(world.coordinator.find_project(project_id))?
        .ok_or_else(|| eyre::eyre!("project {project_id} missing from repository"))
}

#[then("the project is not eligible to advance")]
fn project_not_eligible(world: &StageProgressWorld) -> Result<(), eyre::Report> {
    let eligibility = world
        .last_eligibility
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing eligibility result"))?;
    eyre::ensure!(
        !eligibility.is_eligible(),
        "expected project to be ineligible, got {eligibility:?}"
    );
    Ok(())
}

#[then("the project is eligible to advance")]
fn project_eligible(world: &StageProgressWorld) -> Result<(), eyre::Report> {
    let eligibility = world
        .last_eligibility
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing eligibility result"))?;
    eyre::ensure!(
        eligibility.is_eligible(),
        "expected project to be eligible, got {eligibility:?}"
    );
    Ok(())
}

#[then(r#"the project is at stage "{stage}" with progress {progress:i64}"#)]
fn project_at_stage_with_progress(
    world: &StageProgressWorld,
    stage: String,
    progress: i64,
) -> Result<(), eyre::Report> {
    let expected_stage = Stage::try_from(stage.as_str())
        .map_err(|err| eyre::eyre!("invalid expected stage in scenario: {err}"))?;
    let project = stored_project(world)?;

    if project.stage() != expected_stage {
        return Err(eyre::eyre!(
            "expected stage {}, found {}",
            expected_stage.as_str(),
            project.stage().as_str()
        ));
    }
    if i64::from(project.progress().value()) != progress {
        return Err(eyre::eyre!(
            "expected progress {progress}, found {}",
            project.progress().value()
        ));
    }
    Ok(())
}

#[then("the operation fails because the stage is not complete")]
fn fails_not_eligible(world: &StageProgressWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(
        err,
        CoordinatorError::Domain(ProductionDomainError::NotEligible { .. })
    ) {
        return Err(eyre::eyre!("expected NotEligible error, got {err:?}"));
    }
    Ok(())
}

#[then("the operation fails with a backward transition error")]
fn fails_backward_transition(world: &StageProgressWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(
        err,
        CoordinatorError::Domain(ProductionDomainError::BackwardTransition { .. })
    ) {
        return Err(eyre::eyre!("expected BackwardTransition error, got {err:?}"));
    }
    Ok(())
}

#[then("the operation fails with a terminal stage error")]
fn fails_terminal_stage(world: &StageProgressWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(
        err,
        CoordinatorError::Domain(ProductionDomainError::TerminalStage(_))
    ) {
        return Err(eyre::eyre!("expected TerminalStage error, got {err:?}"));
    }
    Ok(())
}

#[then("the operation fails with a progress out of range error")]
fn fails_progress_out_of_range(world: &StageProgressWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(
        err,
        CoordinatorError::Domain(ProductionDomainError::ProgressOutOfRange(150))
    ) {
        return Err(eyre::eyre!("expected ProgressOutOfRange error, got {err:?}"));
    }
    Ok(())
}

#[then("the operation fails with an invalid stage error")]
fn fails_invalid_stage(world: &StageProgressWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(err, CoordinatorError::InvalidStage(_)) {
        return Err(eyre::eyre!("expected InvalidStage error, got {err:?}"));
    }
    Ok(())
}
