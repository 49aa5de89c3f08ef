use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::agents::prompts::{fill_template, EMAIL_PROMPT_TEMPLATE, EMAIL_SYSTEM};
use crate::agents::{request_record, AgentError, Drafter};
use crate::llm_client::TextModel;
use crate::models::{CandidateProfile, Decision, EmailDraft, JobProfile, Ranking};

/// What the model is asked for. Any decision field it echoes back is ignored.
#[derive(Debug, Deserialize)]
struct DraftText {
    subject: String,
    body: String,
}

pub struct LlmDrafter {
    model: Arc<dyn TextModel>,
}

impl LlmDrafter {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Drafter for LlmDrafter {
    async fn draft(
        &self,
        candidate: &CandidateProfile,
        job: &JobProfile,
        ranking: &Ranking,
        decision: Decision,
    ) -> Result<EmailDraft, AgentError> {
        let candidate_json = serde_json::to_string_pretty(candidate)
            .map_err(|e| AgentError::InvalidRecord(format!("candidate profile: {e}")))?;

        let score = ranking.score.to_string();
        let prompt = fill_template(
            EMAIL_PROMPT_TEMPLATE,
            &[
                ("candidate_json", candidate_json.as_str()),
                ("role", job.role.as_str()),
                ("score", score.as_str()),
                ("decision", decision.as_str()),
            ],
        );

        let text: DraftText = request_record(self.model.as_ref(), &prompt, EMAIL_SYSTEM).await?;
        info!("Drafted {} email for {}", decision.as_str(), candidate.name);

        Ok(EmailDraft {
            subject: text.subject,
            body: text.body,
            decision,
        })
    }
}
