//! When steps for stage progress BDD scenarios.

use super::world::{StageProgressWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use stagecraft::production::services::ChangeStageRequest;

#[when("advancement eligibility is checked")]
fn eligibility_checked(world: &mut StageProgressWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let eligibility = run_async(world.coordinator.advance_eligibility(project_id))
        .wrap_err("evaluate advancement eligibility")?;
    world.last_eligibility = Some(eligibility);
    Ok(())
}

#[when(r#"the task "{title}" is toggled"#)]
fn task_toggled(world: &mut StageProgressWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&title)?.id();
    let toggled = run_async(world.coordinator.toggle_task_completion(task_id))
        .wrap_err("toggle task completion")?;
    world.tasks.insert(title, toggled);
    Ok(())
}

#[when("the project is advanced")]
fn project_advanced(world: &mut StageProgressWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let result = run_async(world.coordinator.advance_stage(project_id));
    world.record(result);
    Ok(())
}

#[when(r#"the stage is changed to "{stage}""#)]
fn stage_changed(world: &mut StageProgressWorld, stage: String) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let result = run_async(
        world
            .coordinator
            .change_stage(ChangeStageRequest::new(project_id, stage)),
    );
    world.record(result);
    Ok(())
}

#[when("the progress is set to {value:i64}")]
fn progress_set(world: &mut StageProgressWorld, value: i64) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let result = run_async(world.coordinator.set_progress(project_id, value));
    world.record(result);
    Ok(())
}
