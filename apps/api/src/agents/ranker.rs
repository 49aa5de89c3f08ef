//! Ranker: scores a candidate against the job profile.
//!
//! Never fails: any problem producing a score (LLM failure, unparsable reply,
//! score outside 0-100) is logged and replaced by `Ranking::degraded()`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::agents::prompts::{fill_template, RANKING_PROMPT_TEMPLATE, RANKING_SYSTEM};
use crate::agents::{request_record, AgentError, Ranker};
use crate::llm_client::TextModel;
use crate::models::{CandidateProfile, JobProfile, Ranking};

const MAX_SCORE: u32 = 100;

pub struct LlmRanker {
    model: Arc<dyn TextModel>,
}

impl LlmRanker {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    async fn try_rank(
        &self,
        job: &JobProfile,
        candidate: &CandidateProfile,
    ) -> Result<Ranking, AgentError> {
        let job_json = serde_json::to_string_pretty(job)
            .map_err(|e| AgentError::InvalidRecord(format!("job profile: {e}")))?;
        let candidate_json = serde_json::to_string_pretty(candidate)
            .map_err(|e| AgentError::InvalidRecord(format!("candidate profile: {e}")))?;

        let prompt = fill_template(
            RANKING_PROMPT_TEMPLATE,
            &[
                ("job_json", job_json.as_str()),
                ("candidate_json", candidate_json.as_str()),
            ],
        );

        let ranking: Ranking = request_record(self.model.as_ref(), &prompt, RANKING_SYSTEM).await?;
        if ranking.score > MAX_SCORE {
            return Err(AgentError::InvalidRecord(format!(
                "score {} is outside 0-{MAX_SCORE}",
                ranking.score
            )));
        }
        Ok(ranking)
    }
}

#[async_trait]
impl Ranker for LlmRanker {
    async fn rank(&self, job: &JobProfile, candidate: &CandidateProfile) -> Ranking {
        match self.try_rank(job, candidate).await {
            Ok(ranking) => {
                info!("Ranked {}: {}/100", candidate.name, ranking.score);
                ranking
            }
            Err(e) => {
                warn!("Ranking failed for {}: {e}", candidate.name);
                Ranking::degraded()
            }
        }
    }
}
