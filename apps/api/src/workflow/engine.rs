//! Workflow engine: executes the hiring graph over one `WorkflowState`.
//!
//! The engine owns the state for the whole run and lends it to one step at a
//! time. Execution is strictly sequential. The first failing step aborts the
//! run; the abort carries the state as it was when the step failed.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::agents::Collaborators;
use crate::workflow::error::PipelineError;
use crate::workflow::graph::{Step, Transition, WorkflowGraph};
use crate::workflow::state::WorkflowState;
use crate::workflow::steps;

/// A run that stopped before reaching the finish step.
#[derive(Debug, Error)]
#[error("pipeline aborted at {step}: {error}")]
pub struct PipelineAbort {
    pub step: Step,
    #[source]
    pub error: PipelineError,
    /// Everything populated before the failure.
    pub state: Box<WorkflowState>,
}

pub struct Workflow {
    collaborators: Collaborators,
    graph: WorkflowGraph,
}

impl Workflow {
    pub fn new(collaborators: Collaborators) -> Self {
        Self::with_graph(collaborators, WorkflowGraph::hiring())
    }

    pub fn with_graph(collaborators: Collaborators, graph: WorkflowGraph) -> Self {
        Self {
            collaborators,
            graph,
        }
    }

    /// Runs the graph from its entry step to its finish step.
    pub async fn run(&self, state: WorkflowState) -> Result<WorkflowState, PipelineAbort> {
        let run_id = Uuid::new_v4();
        let mut state = state;
        let mut step = self.graph.entry();
        let mut visited = HashSet::new();

        info!(
            "Run {run_id} started: {} resume(s)",
            state.candidate_count()
        );

        loop {
            if !visited.insert(step) {
                return Err(abort(run_id, step, PipelineError::StepRevisited(step), state));
            }

            info!("Run {run_id}: {step} running");
            if let Err(e) = self.execute(step, &mut state).await {
                return Err(abort(run_id, step, e, state));
            }
            info!("Run {run_id}: {step} complete");

            match self.graph.next(step, &mut state) {
                Ok(Transition::Continue(next)) => step = next,
                Ok(Transition::Done) => break,
                Err(e) => return Err(abort(run_id, step, e, state)),
            }
        }

        info!("Run {run_id} finished");
        Ok(state)
    }

    async fn execute(&self, step: Step, state: &mut WorkflowState) -> Result<(), PipelineError> {
        let c = &self.collaborators;
        match step {
            Step::AnalyzeJob => steps::analyze_job(state, c.job_analyzer.as_ref()).await,
            Step::ParseResumes => steps::parse_resumes(state, c.resume_analyzer.as_ref()).await,
            Step::RankCandidates => steps::rank_candidates(state, c.ranker.as_ref()).await,
            Step::DraftEmails => steps::draft_emails(state, c.drafter.as_ref()).await,
            Step::ScheduleInterviews => {
                steps::schedule_interviews(state, c.scheduler.as_ref()).await
            }
            Step::Notify => steps::notify(state, c.notifier.as_ref()).await,
        }
    }
}

fn abort(run_id: Uuid, step: Step, error: PipelineError, state: WorkflowState) -> PipelineAbort {
    error!("Run {run_id} aborted at {step}: {error}");
    PipelineAbort {
        step,
        error,
        state: Box::new(state),
    }
}
