use thiserror::Error;

use crate::agents::{AgentError, ErrorCategory};
use crate::workflow::graph::Step;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{step} failed: {source}")]
    Step {
        step: Step,
        #[source]
        source: AgentError,
    },

    #[error("{step} requires {field}, which has not been populated")]
    MissingInput { step: Step, field: &'static str },

    #[error("{step} found {field} with {found} entries, expected {expected}")]
    Misaligned {
        step: Step,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("workflow graph has no edge out of {0}")]
    UnwiredStep(Step),

    #[error("workflow graph returned to {0}, which already ran")]
    StepRevisited(Step),
}

impl PipelineError {
    pub(crate) fn at(step: Step) -> impl FnOnce(AgentError) -> PipelineError {
        move |source| PipelineError::Step { step, source }
    }

    /// The collaborator error category, when a collaborator caused the failure.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            PipelineError::Step { source, .. } => Some(source.category()),
            _ => None,
        }
    }
}
