//! Orchestration services for the workflow module.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, TaskWorkflowError, TaskWorkflowResult, TaskWorkflowService,
    TransitionTaskRequest,
};
