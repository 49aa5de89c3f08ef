//! Workflow graph: which step follows which.
//!
//! ```text
//! analyze_job → parse_resumes → rank_candidates → draft_emails ─┬─ any qualifies ─→ schedule_interviews ─┐
//!                                                               └─ nobody ─────────────────────────────┴─→ notify
//! ```
//!
//! Edges are data. The engine asks the graph for the next step after each one
//! finishes; the graph answers with a `Transition`.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::workflow::branch::should_schedule;
use crate::workflow::error::PipelineError;
use crate::workflow::state::WorkflowState;
use crate::workflow::steps::record_scheduling_skipped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    AnalyzeJob,
    ParseResumes,
    RankCandidates,
    DraftEmails,
    ScheduleInterviews,
    Notify,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::AnalyzeJob => "analyze_job",
            Step::ParseResumes => "parse_resumes",
            Step::RankCandidates => "rank_candidates",
            Step::DraftEmails => "draft_emails",
            Step::ScheduleInterviews => "schedule_interviews",
            Step::Notify => "notify",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue(Step),
    Done,
}

pub type Gate = fn(&WorkflowState) -> bool;
/// Runs when a conditional edge routes around its `when_true` step.
pub type Bypass = fn(&mut WorkflowState);

#[derive(Clone, Copy)]
pub enum Edge {
    Direct(Step),
    Conditional {
        gate: Gate,
        when_true: Step,
        when_false: Step,
        on_bypass: Option<Bypass>,
    },
}

#[derive(Clone)]
pub struct WorkflowGraph {
    entry: Step,
    finish: Step,
    edges: HashMap<Step, Edge>,
}

impl WorkflowGraph {
    pub fn new(entry: Step, finish: Step) -> Self {
        Self {
            entry,
            finish,
            edges: HashMap::new(),
        }
    }

    pub fn edge(mut self, from: Step, to: Step) -> Self {
        self.edges.insert(from, Edge::Direct(to));
        self
    }

    pub fn conditional_edge(
        mut self,
        from: Step,
        gate: Gate,
        when_true: Step,
        when_false: Step,
        on_bypass: Option<Bypass>,
    ) -> Self {
        self.edges.insert(
            from,
            Edge::Conditional {
                gate,
                when_true,
                when_false,
                on_bypass,
            },
        );
        self
    }

    /// The hiring pipeline.
    pub fn hiring() -> Self {
        Self::new(Step::AnalyzeJob, Step::Notify)
            .edge(Step::AnalyzeJob, Step::ParseResumes)
            .edge(Step::ParseResumes, Step::RankCandidates)
            .edge(Step::RankCandidates, Step::DraftEmails)
            .conditional_edge(
                Step::DraftEmails,
                any_candidate_qualifies,
                Step::ScheduleInterviews,
                Step::Notify,
                Some(record_scheduling_skipped),
            )
            .edge(Step::ScheduleInterviews, Step::Notify)
    }

    pub fn entry(&self) -> Step {
        self.entry
    }

    /// Resolves the step after `step`. Conditional gates are evaluated here, once
    /// per traversal of their edge.
    pub fn next(&self, step: Step, state: &mut WorkflowState) -> Result<Transition, PipelineError> {
        if step == self.finish {
            return Ok(Transition::Done);
        }

        match self.edges.get(&step) {
            Some(Edge::Direct(to)) => Ok(Transition::Continue(*to)),
            Some(Edge::Conditional {
                gate,
                when_true,
                when_false,
                on_bypass,
            }) => {
                if (*gate)(state) {
                    Ok(Transition::Continue(*when_true))
                } else {
                    if let Some(bypass) = on_bypass {
                        (*bypass)(state);
                    }
                    Ok(Transition::Continue(*when_false))
                }
            }
            None => Err(PipelineError::UnwiredStep(step)),
        }
    }
}

fn any_candidate_qualifies(state: &WorkflowState) -> bool {
    should_schedule(&state.rankings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ranking, SchedulingOutcome};

    fn state_with_scores(scores: &[u32]) -> WorkflowState {
        let mut state = WorkflowState::new(
            "job",
            scores.iter().map(|s| format!("{s}.pdf")).collect(),
        );
        state.rankings = scores
            .iter()
            .map(|&score| Ranking {
                score,
                summary: String::new(),
            })
            .collect();
        state
    }

    #[test]
    fn test_linear_prefix_of_hiring_graph() {
        let graph = WorkflowGraph::hiring();
        let mut state = WorkflowState::default();
        assert_eq!(graph.entry(), Step::AnalyzeJob);
        assert_eq!(
            graph.next(Step::AnalyzeJob, &mut state).unwrap(),
            Transition::Continue(Step::ParseResumes)
        );
        assert_eq!(
            graph.next(Step::RankCandidates, &mut state).unwrap(),
            Transition::Continue(Step::DraftEmails)
        );
        assert_eq!(
            graph.next(Step::ScheduleInterviews, &mut state).unwrap(),
            Transition::Continue(Step::Notify)
        );
        assert_eq!(graph.next(Step::Notify, &mut state).unwrap(), Transition::Done);
    }

    #[test]
    fn test_drafting_routes_to_scheduling_when_someone_qualifies() {
        let graph = WorkflowGraph::hiring();
        let mut state = state_with_scores(&[30, 80]);
        assert_eq!(
            graph.next(Step::DraftEmails, &mut state).unwrap(),
            Transition::Continue(Step::ScheduleInterviews)
        );
        assert!(state.scheduling.is_empty());
    }

    #[test]
    fn test_drafting_bypasses_scheduling_with_placeholders() {
        let graph = WorkflowGraph::hiring();
        let mut state = state_with_scores(&[30, 74]);
        assert_eq!(
            graph.next(Step::DraftEmails, &mut state).unwrap(),
            Transition::Continue(Step::Notify)
        );
        assert_eq!(
            state.scheduling,
            vec![SchedulingOutcome::Skipped, SchedulingOutcome::Skipped]
        );
    }

    #[test]
    fn test_unwired_step_is_an_error() {
        let graph = WorkflowGraph::new(Step::AnalyzeJob, Step::Notify);
        let err = graph
            .next(Step::AnalyzeJob, &mut WorkflowState::default())
            .unwrap_err();
        assert!(matches!(err, PipelineError::UnwiredStep(Step::AnalyzeJob)));
    }

    #[test]
    fn test_step_names_are_snake_case() {
        assert_eq!(Step::ScheduleInterviews.to_string(), "schedule_interviews");
        assert_eq!(
            serde_json::to_string(&Step::DraftEmails).unwrap(),
            r#""draft_emails""#
        );
    }
}
