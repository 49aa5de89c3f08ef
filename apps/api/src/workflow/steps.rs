//! The six workflow steps.
//!
//! Each step writes exactly one field of `WorkflowState` and reads only fields
//! written by earlier steps. Per-candidate work runs in resume order, one
//! collaborator call at a time, and results are pushed as they arrive. A failing
//! call returns immediately, leaving the completed prefix in place.

use tracing::info;

use crate::agents::{Drafter, JobAnalyzer, Notifier, Ranker, ResumeAnalyzer, Scheduler};
use crate::models::{Decision, JobProfile, SchedulingOutcome};
use crate::workflow::branch::qualifies;
use crate::workflow::error::PipelineError;
use crate::workflow::graph::Step;
use crate::workflow::state::WorkflowState;

pub async fn analyze_job(
    state: &mut WorkflowState,
    analyzer: &dyn JobAnalyzer,
) -> Result<(), PipelineError> {
    let profile = analyzer
        .analyze(&state.job_text)
        .await
        .map_err(PipelineError::at(Step::AnalyzeJob))?;
    state.job_profile = Some(profile);
    Ok(())
}

pub async fn parse_resumes(
    state: &mut WorkflowState,
    analyzer: &dyn ResumeAnalyzer,
) -> Result<(), PipelineError> {
    for source in &state.resume_sources {
        let profile = analyzer
            .parse(source)
            .await
            .map_err(PipelineError::at(Step::ParseResumes))?;
        state.candidate_profiles.push(profile);
    }
    info!("Parsed {} resumes", state.candidate_profiles.len());
    Ok(())
}

pub async fn rank_candidates(
    state: &mut WorkflowState,
    ranker: &dyn Ranker,
) -> Result<(), PipelineError> {
    let step = Step::RankCandidates;
    let job = require_job(&state.job_profile, step)?;
    expect_len(
        step,
        "candidate_profiles",
        state.candidate_profiles.len(),
        state.resume_sources.len(),
    )?;

    for candidate in &state.candidate_profiles {
        let ranking = ranker.rank(job, candidate).await;
        state.rankings.push(ranking);
    }
    Ok(())
}

pub async fn draft_emails(
    state: &mut WorkflowState,
    drafter: &dyn Drafter,
) -> Result<(), PipelineError> {
    let step = Step::DraftEmails;
    let job = require_job(&state.job_profile, step)?;
    expect_len(step, "rankings", state.rankings.len(), state.candidate_profiles.len())?;

    for (candidate, ranking) in state.candidate_profiles.iter().zip(&state.rankings) {
        let decision = Decision::for_score(ranking.score);
        let mut draft = drafter
            .draft(candidate, job, ranking, decision)
            .await
            .map_err(PipelineError::at(step))?;
        draft.decision = decision;
        state.drafts.push(draft);
    }
    Ok(())
}

pub async fn schedule_interviews(
    state: &mut WorkflowState,
    scheduler: &dyn Scheduler,
) -> Result<(), PipelineError> {
    let step = Step::ScheduleInterviews;
    expect_len(step, "rankings", state.rankings.len(), state.candidate_profiles.len())?;

    for (candidate, ranking) in state.candidate_profiles.iter().zip(&state.rankings) {
        let outcome = if qualifies(ranking) {
            let booked = scheduler
                .schedule(candidate, ranking)
                .await
                .map_err(PipelineError::at(step))?;
            SchedulingOutcome::Scheduled {
                slots: booked.slots,
                confirmed_link: booked.confirmed_link,
            }
        } else {
            SchedulingOutcome::Skipped
        };
        state.scheduling.push(outcome);
    }
    info!(
        "Scheduled {} of {} candidates",
        state.scheduling.iter().filter(|s| s.is_scheduled()).count(),
        state.scheduling.len()
    );
    Ok(())
}

/// Placeholder scheduling entries for a run that never entered the scheduling step.
pub fn record_scheduling_skipped(state: &mut WorkflowState) {
    if state.scheduling.is_empty() {
        state.scheduling = vec![SchedulingOutcome::Skipped; state.rankings.len()];
    }
}

pub async fn notify(
    state: &mut WorkflowState,
    notifier: &dyn Notifier,
) -> Result<(), PipelineError> {
    let step = Step::Notify;
    let n = state.candidate_profiles.len();
    expect_len(step, "rankings", state.rankings.len(), n)?;
    expect_len(step, "drafts", state.drafts.len(), n)?;
    expect_len(step, "scheduling", state.scheduling.len(), n)?;

    for i in 0..n {
        let outcome = notifier
            .notify(
                &state.candidate_profiles[i],
                &state.rankings[i],
                &state.drafts[i],
                &state.scheduling[i],
            )
            .await;
        state.notifications.push(outcome);
    }
    Ok(())
}

fn require_job(job: &Option<JobProfile>, step: Step) -> Result<&JobProfile, PipelineError> {
    job.as_ref().ok_or(PipelineError::MissingInput {
        step,
        field: "job_profile",
    })
}

fn expect_len(
    step: Step,
    field: &'static str,
    found: usize,
    expected: usize,
) -> Result<(), PipelineError> {
    if found == expected {
        Ok(())
    } else {
        Err(PipelineError::Misaligned {
            step,
            field,
            expected,
            found,
        })
    }
}
