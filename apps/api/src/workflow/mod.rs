//! Hiring workflow: the state, steps, graph, and engine that turn a job
//! description and a batch of resumes into rankings, emails, interviews, and
//! notifications.
//!
//! All collaborator calls go through `crate::agents`; nothing in here talks to
//! an external service directly.

pub mod branch;
pub mod engine;
pub mod error;
pub mod graph;
pub mod state;
pub mod steps;

#[cfg(test)]
pub mod testing;

pub use engine::{PipelineAbort, Workflow};
pub use state::WorkflowState;
