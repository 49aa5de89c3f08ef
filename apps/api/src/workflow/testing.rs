//! In-memory collaborators for workflow tests. Resume sources double as
//! candidate names, and the ranker looks scores up by name.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Local;

use crate::agents::scheduler::propose_slots;
use crate::agents::testing::{sample_candidate, sample_job};
use crate::agents::{
    AgentError, Collaborators, Drafter, InterviewSlots, JobAnalyzer, Notifier, Ranker,
    ResumeAnalyzer, Scheduler,
};
use crate::integrations::google_calendar::CalendarError;
use crate::models::{
    CandidateProfile, Decision, DeliveryStatus, EmailDraft, JobProfile, NotificationOutcome,
    Ranking, SchedulingOutcome,
};

pub struct FakeJobAnalyzer;

#[async_trait]
impl JobAnalyzer for FakeJobAnalyzer {
    async fn analyze(&self, _job_text: &str) -> Result<JobProfile, AgentError> {
        Ok(sample_job())
    }
}

#[derive(Default)]
pub struct FakeResumeAnalyzer {
    fail_on: Option<usize>,
    calls: AtomicUsize,
}

impl FakeResumeAnalyzer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResumeAnalyzer for FakeResumeAnalyzer {
    async fn parse(&self, source: &str) -> Result<CandidateProfile, AgentError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == Some(index) {
            return Err(AgentError::ResumeSource {
                path: source.to_string(),
                reason: "corrupt pdf".to_string(),
            });
        }
        Ok(sample_candidate(source))
    }
}

/// Unknown names get the degraded ranking, as if the model call had failed.
pub struct FakeRanker {
    scores: HashMap<String, u32>,
}

#[async_trait]
impl Ranker for FakeRanker {
    async fn rank(&self, _job: &JobProfile, candidate: &CandidateProfile) -> Ranking {
        self.scores
            .get(&candidate.name)
            .map(|&score| Ranking {
                score,
                summary: format!("{} scored {score}", candidate.name),
            })
            .unwrap_or_else(Ranking::degraded)
    }
}

/// Always proposes an invite and records the decision it was given.
#[derive(Default)]
pub struct FakeDrafter {
    decisions: Mutex<Vec<Decision>>,
}

impl FakeDrafter {
    pub fn decisions(&self) -> Vec<Decision> {
        self.decisions.lock().unwrap().clone()
    }
}

#[async_trait]
impl Drafter for FakeDrafter {
    async fn draft(
        &self,
        candidate: &CandidateProfile,
        _job: &JobProfile,
        _ranking: &Ranking,
        decision: Decision,
    ) -> Result<EmailDraft, AgentError> {
        self.decisions.lock().unwrap().push(decision);
        Ok(EmailDraft {
            subject: format!("Update for {}", candidate.name),
            body: "Dear candidate".to_string(),
            decision: Decision::Invite,
        })
    }
}

#[derive(Default)]
pub struct FakeScheduler {
    fail: bool,
    names: Mutex<Vec<String>>,
}

impl FakeScheduler {
    pub fn scheduled_names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.names.lock().unwrap().len()
    }
}

#[async_trait]
impl Scheduler for FakeScheduler {
    async fn schedule(
        &self,
        candidate: &CandidateProfile,
        _ranking: &Ranking,
    ) -> Result<InterviewSlots, AgentError> {
        self.names.lock().unwrap().push(candidate.name.clone());
        if self.fail {
            return Err(AgentError::Calendar(CalendarError::Unauthenticated));
        }
        Ok(InterviewSlots {
            slots: propose_slots(Local::now().naive_local()),
            confirmed_link: format!("https://calendar.example/{}", candidate.name),
        })
    }
}

pub struct FakeNotifier;

#[async_trait]
impl Notifier for FakeNotifier {
    async fn notify(
        &self,
        candidate: &CandidateProfile,
        ranking: &Ranking,
        draft: &EmailDraft,
        scheduling: &SchedulingOutcome,
    ) -> NotificationOutcome {
        NotificationOutcome {
            status: DeliveryStatus::Sent,
            channel: "#hiring".to_string(),
            message: format!(
                "{}:{}:{}:{}",
                candidate.name,
                ranking.score,
                draft.decision.as_str(),
                scheduling.is_scheduled()
            ),
        }
    }
}

pub struct Harness {
    pub job_analyzer: Arc<FakeJobAnalyzer>,
    pub resume_analyzer: Arc<FakeResumeAnalyzer>,
    pub ranker: Arc<FakeRanker>,
    pub drafter: Arc<FakeDrafter>,
    pub scheduler: Arc<FakeScheduler>,
    pub notifier: Arc<FakeNotifier>,
}

impl Harness {
    pub fn with_scores(scores: &[(&str, u32)]) -> Self {
        Self {
            job_analyzer: Arc::new(FakeJobAnalyzer),
            resume_analyzer: Arc::new(FakeResumeAnalyzer::default()),
            ranker: Arc::new(FakeRanker {
                scores: scores
                    .iter()
                    .map(|(name, score)| (name.to_string(), *score))
                    .collect(),
            }),
            drafter: Arc::new(FakeDrafter::default()),
            scheduler: Arc::new(FakeScheduler::default()),
            notifier: Arc::new(FakeNotifier),
        }
    }

    pub fn failing_resume(mut self, index: usize) -> Self {
        self.resume_analyzer = Arc::new(FakeResumeAnalyzer {
            fail_on: Some(index),
            calls: AtomicUsize::new(0),
        });
        self
    }

    pub fn failing_scheduler(mut self) -> Self {
        self.scheduler = Arc::new(FakeScheduler {
            fail: true,
            names: Mutex::new(Vec::new()),
        });
        self
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            job_analyzer: self.job_analyzer.clone(),
            resume_analyzer: self.resume_analyzer.clone(),
            ranker: self.ranker.clone(),
            drafter: self.drafter.clone(),
            scheduler: self.scheduler.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

pub fn sources(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
