//! Then steps for task workflow BDD scenarios.

use super::world::TaskWorkflowWorld;
use rstest_bdd_macros::then;
use tablero::workflow::{
    domain::{Status, WorkflowDomainError},
    services::TaskWorkflowError,
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let expected = Status::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }

    Ok(())
}

#[then("the task has a completion timestamp")]
fn task_has_completion_timestamp(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.completed_at().is_none() {
        return Err(eyre::eyre!("expected a completion timestamp, found none"));
    }

    Ok(())
}

#[then("the task has no completion timestamp")]
fn task_has_no_completion_timestamp(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if let Some(at) = task.completed_at() {
        return Err(eyre::eyre!("expected no completion timestamp, found {at}"));
    }

    Ok(())
}

#[then("the transition fails with an unknown status error")]
fn transition_fails_with_unknown_status(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(
        result,
        Err(TaskWorkflowError::Domain(WorkflowDomainError::UnknownStatus(_)))
    ) {
        return Err(eyre::eyre!("expected UnknownStatus error, got {result:?}"));
    }

    Ok(())
}
