//! Test doubles and fixtures shared by agent and workflow tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextModel};
use crate::models::candidate::{Experience, Project};
use crate::models::{CandidateProfile, JobProfile};

/// One canned reply from `ScriptedModel`.
pub enum Reply {
    Text(String),
    ApiFailure(u16),
}

/// A `TextModel` that plays back canned replies in order and records prompts.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn replying(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn text(reply: &str) -> Self {
        Self::replying(vec![Reply::Text(reply.to_string())])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for ScriptedModel {
    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::ApiFailure(status)) => Err(LlmError::Api {
                status,
                message: "scripted failure".to_string(),
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}

pub fn sample_job() -> JobProfile {
    JobProfile {
        role: "Senior Go Engineer".to_string(),
        skills: vec!["Go".to_string(), "gRPC".to_string()],
        tools: vec!["Kubernetes".to_string()],
        experience_years: 5,
        soft_skills: vec!["communication".to_string()],
    }
}

pub fn sample_candidate(name: &str) -> CandidateProfile {
    CandidateProfile {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "+91 98765 43210".to_string(),
        skills: vec!["Go".to_string()],
        education: vec!["B.Tech Computer Science".to_string()],
        experience: vec![Experience {
            company: "Acme".to_string(),
            role: "Backend Engineer".to_string(),
            duration: "2019-2024".to_string(),
        }],
        projects: vec![Project {
            title: "rate-limiter".to_string(),
            description: "Token bucket service".to_string(),
        }],
    }
}
