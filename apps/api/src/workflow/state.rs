use serde::{Deserialize, Serialize};

use crate::models::{
    CandidateProfile, EmailDraft, JobProfile, NotificationOutcome, Ranking, SchedulingOutcome,
};

/// The single record threaded through every step of a run.
///
/// Fields are filled in order, one step at a time, and never rewritten. Every
/// per-candidate sequence is index-aligned with `resume_sources`: entry `i` of
/// `rankings`, `drafts`, ... belongs to the resume at `resume_sources[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    pub job_text: String,
    pub resume_sources: Vec<String>,
    pub job_profile: Option<JobProfile>,
    pub candidate_profiles: Vec<CandidateProfile>,
    pub rankings: Vec<Ranking>,
    pub drafts: Vec<EmailDraft>,
    pub scheduling: Vec<SchedulingOutcome>,
    pub notifications: Vec<NotificationOutcome>,
}

impl WorkflowState {
    pub fn new(job_text: impl Into<String>, resume_sources: Vec<String>) -> Self {
        Self {
            job_text: job_text.into(),
            resume_sources,
            ..Self::default()
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.resume_sources.len()
    }

    /// True when every per-candidate sequence has one entry per resume.
    #[cfg(test)]
    pub fn is_complete(&self) -> bool {
        let n = self.candidate_count();
        self.job_profile.is_some()
            && self.candidate_profiles.len() == n
            && self.rankings.len() == n
            && self.drafts.len() == n
            && self.scheduling.len() == n
            && self.notifications.len() == n
    }
}
