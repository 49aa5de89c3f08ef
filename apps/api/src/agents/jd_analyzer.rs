use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::agents::prompts::{JOB_ANALYSIS_PROMPT_TEMPLATE, JOB_ANALYSIS_SYSTEM};
use crate::agents::{request_record, AgentError, JobAnalyzer};
use crate::llm_client::TextModel;
use crate::models::JobProfile;

pub struct LlmJobAnalyzer {
    model: Arc<dyn TextModel>,
}

impl LlmJobAnalyzer {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl JobAnalyzer for LlmJobAnalyzer {
    async fn analyze(&self, job_text: &str) -> Result<JobProfile, AgentError> {
        let prompt = JOB_ANALYSIS_PROMPT_TEMPLATE.replace("{job_text}", job_text);
        let profile: JobProfile =
            request_record(self.model.as_ref(), &prompt, JOB_ANALYSIS_SYSTEM).await?;
        info!(
            "Job analyzed: role='{}', {} skills, {}+ years",
            profile.role,
            profile.skills.len(),
            profile.experience_years
        );
        Ok(profile)
    }
}
