//! Resume analyzer: reads a resume file and extracts a `CandidateProfile`.
//!
//! PDF sources go through `pdf_extract` on the blocking pool; any other extension
//! is read as UTF-8 text.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::agents::prompts::{RESUME_PARSE_PROMPT_TEMPLATE, RESUME_PARSE_SYSTEM};
use crate::agents::{request_record, AgentError, ResumeAnalyzer};
use crate::llm_client::TextModel;
use crate::models::CandidateProfile;

pub struct LlmResumeAnalyzer {
    model: Arc<dyn TextModel>,
}

impl LlmResumeAnalyzer {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl ResumeAnalyzer for LlmResumeAnalyzer {
    async fn parse(&self, source: &str) -> Result<CandidateProfile, AgentError> {
        let resume_text = load_resume_text(source).await?;
        debug!("Extracted {} chars from {source}", resume_text.len());

        let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", &resume_text);
        let profile: CandidateProfile =
            request_record(self.model.as_ref(), &prompt, RESUME_PARSE_SYSTEM).await?;
        info!("Resume parsed: {} ({source})", profile.name);
        Ok(profile)
    }
}

/// Reads the text content of a resume file.
pub async fn load_resume_text(source: &str) -> Result<String, AgentError> {
    let path = Path::new(source.trim()).to_path_buf();
    let unreadable = |reason: String| AgentError::ResumeSource {
        path: path.display().to_string(),
        reason,
    };

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    let text = if is_pdf {
        let pdf_path = path.clone();
        tokio::task::spawn_blocking(move || pdf_extract::extract_text(&pdf_path))
            .await
            .map_err(|e| unreadable(format!("extraction task failed: {e}")))?
            .map_err(|e| unreadable(e.to_string()))?
    } else {
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| unreadable(e.to_string()))?
    };

    if text.trim().is_empty() {
        return Err(unreadable("no extractable text".to_string()));
    }
    Ok(text)
}
