use serde::{Deserialize, Serialize};

/// Structured view of a job description, produced by the job analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub role: String,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    /// Minimum years of experience. Estimated by the model when the posting is silent.
    pub experience_years: u32,
    pub soft_skills: Vec<String>,
}
