//! Collaborators: the external boundaries the hiring workflow depends on.
//!
//! Each boundary is an async trait so the workflow engine never sees a concrete
//! backend. Production backends:
//! - `LlmJobAnalyzer`, `LlmResumeAnalyzer`, `LlmRanker`, `LlmDrafter` (Claude via `TextModel`)
//! - `CalendarScheduler` (Google Calendar)
//! - `SlackNotifier` (Slack)
//!
//! `Collaborators` bundles one of each and is built once per process.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::integrations::google_calendar::{CalendarClient, CalendarError};
use crate::integrations::slack::SlackClient;
use crate::llm_client::evaluator::{parse_record, EvaluationError};
use crate::llm_client::{LlmClient, LlmError, TextModel};
use crate::models::{
    CandidateProfile, Decision, EmailDraft, JobProfile, NotificationOutcome, Ranking,
    SchedulingOutcome,
};

pub mod email_drafter;
pub mod jd_analyzer;
pub mod notifier;
pub mod prompts;
pub mod ranker;
pub mod resume_parser;
pub mod scheduler;

#[cfg(test)]
pub mod testing;

pub use email_drafter::LlmDrafter;
pub use jd_analyzer::LlmJobAnalyzer;
pub use notifier::SlackNotifier;
pub use ranker::LlmRanker;
pub use resume_parser::LlmResumeAnalyzer;
pub use scheduler::CalendarScheduler;

const INTEGRATION_TIMEOUT_SECS: u64 = 60;

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Whether a failure came from bad data or from an unavailable service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    CollaboratorOutput,
    CollaboratorUnavailable,
}

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("model output could not be interpreted: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("model returned an invalid record: {0}")]
    InvalidRecord(String),

    #[error("language model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("resume source '{path}' is unreadable: {reason}")]
    ResumeSource { path: String, reason: String },

    #[error("calendar service failed: {0}")]
    Calendar(#[from] CalendarError),
}

impl AgentError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AgentError::Evaluation(_)
            | AgentError::InvalidRecord(_)
            | AgentError::ResumeSource { .. }
            | AgentError::Llm(LlmError::EmptyContent)
            | AgentError::Calendar(CalendarError::MissingLink) => {
                ErrorCategory::CollaboratorOutput
            }
            AgentError::Llm(_) | AgentError::Calendar(_) => ErrorCategory::CollaboratorUnavailable,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Collaborator traits
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait JobAnalyzer: Send + Sync {
    async fn analyze(&self, job_text: &str) -> Result<JobProfile, AgentError>;
}

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    /// `source` is a resume identifier, in practice a file path.
    async fn parse(&self, source: &str) -> Result<CandidateProfile, AgentError>;
}

/// Rankers never fail. Internal failures come back as `Ranking::degraded()`.
#[async_trait]
pub trait Ranker: Send + Sync {
    async fn rank(&self, job: &JobProfile, candidate: &CandidateProfile) -> Ranking;
}

/// The decision is made by the caller; the drafter only words the email.
#[async_trait]
pub trait Drafter: Send + Sync {
    async fn draft(
        &self,
        candidate: &CandidateProfile,
        job: &JobProfile,
        ranking: &Ranking,
        decision: Decision,
    ) -> Result<EmailDraft, AgentError>;
}

/// Proposed interview times plus the link of the booked event.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewSlots {
    pub slots: Vec<NaiveDateTime>,
    pub confirmed_link: String,
}

#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn schedule(
        &self,
        candidate: &CandidateProfile,
        ranking: &Ranking,
    ) -> Result<InterviewSlots, AgentError>;
}

/// Notifiers never fail. Delivery problems are recorded in the outcome status.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        candidate: &CandidateProfile,
        ranking: &Ranking,
        draft: &EmailDraft,
        scheduling: &SchedulingOutcome,
    ) -> NotificationOutcome;
}

// ────────────────────────────────────────────────────────────────────────────
// Wiring
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct Collaborators {
    pub job_analyzer: Arc<dyn JobAnalyzer>,
    pub resume_analyzer: Arc<dyn ResumeAnalyzer>,
    pub ranker: Arc<dyn Ranker>,
    pub drafter: Arc<dyn Drafter>,
    pub scheduler: Arc<dyn Scheduler>,
    pub notifier: Arc<dyn Notifier>,
}

impl Collaborators {
    /// Builds the production backends from configuration.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let model: Arc<dyn TextModel> = Arc::new(LlmClient::new(config.anthropic_api_key.clone())?);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(INTEGRATION_TIMEOUT_SECS))
            .build()?;

        let calendar = CalendarClient::new(
            http.clone(),
            config.google_calendar_token.clone(),
            config.google_calendar_id.clone(),
            config.calendar_time_zone.clone(),
        );
        let slack = SlackClient::new(
            http,
            config.slack_bot_token.clone(),
            config.slack_channel.clone(),
        );

        Ok(Self {
            job_analyzer: Arc::new(LlmJobAnalyzer::new(model.clone())),
            resume_analyzer: Arc::new(LlmResumeAnalyzer::new(model.clone())),
            ranker: Arc::new(LlmRanker::new(model.clone())),
            drafter: Arc::new(LlmDrafter::new(model)),
            scheduler: Arc::new(CalendarScheduler::new(calendar)),
            notifier: Arc::new(SlackNotifier::new(slack)),
        })
    }
}

/// Sends one prompt and parses the reply into a typed record.
pub(crate) async fn request_record<T: DeserializeOwned>(
    model: &dyn TextModel,
    prompt: &str,
    system: &str,
) -> Result<T, AgentError> {
    let text = model.complete(prompt, system).await?;
    Ok(parse_record(&text)?)
}
