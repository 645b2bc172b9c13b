//! Given steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use chrono::{TimeDelta, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tablero::workflow::services::{CreateTaskRequest, TransitionTaskRequest};

#[given(r#"a task titled "{title}" due in {hours:u64} hours"#)]
fn task_due_in_hours(
    world: &mut TaskWorkflowWorld,
    title: String,
    hours: u64,
) -> Result<(), eyre::Report> {
    let delta = TimeDelta::hours(
        i64::try_from(hours).wrap_err("due offset too large for scenario")?,
    );
    let created = run_async(
        world
            .service
            .create_task(CreateTaskRequest::new(title, Utc::now() + delta)),
    )
    .wrap_err("create task for workflow scenario")?;
    world.last_created_task = Some(created);
    Ok(())
}

#[given(r#"the task has been transitioned to "{status}""#)]
fn task_has_been_transitioned(
    world: &mut TaskWorkflowWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let transitioned = run_async(
        world
            .service
            .transition_task(TransitionTaskRequest::new(task.id(), status)),
    )
    .wrap_err("transition task in scenario setup")?;

    world.last_created_task = Some(transitioned);
    Ok(())
}
