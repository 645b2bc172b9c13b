//! When steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use rstest_bdd_macros::when;
use tablero::workflow::services::TransitionTaskRequest;

#[when(r#"the task is transitioned to "{status}""#)]
fn transition_task(world: &mut TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let result = run_async(
        world
            .service
            .transition_task(TransitionTaskRequest::new(task.id(), status)),
    );
    if let Ok(ref updated) = result {
        world.last_created_task = Some(updated.clone());
    }
    world.last_transition_result = Some(result);
    Ok(())
}
