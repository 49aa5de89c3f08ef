//! Evaluator adapter: turns free-form model text into a typed record.
//!
//! Models are told to answer with bare JSON but regularly wrap it in code fences
//! or surround it with prose. Parsing order:
//! 1. strip ``` fences and parse the whole text
//! 2. fall back to the span from the first `{` to the last `}`
//!
//! Nothing beyond structural deserialization is checked here.

use serde::de::DeserializeOwned;
use thiserror::Error;

const EXCERPT_CHARS: usize = 80;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("model returned empty output")]
    Empty,

    #[error("no JSON object found in model output: {excerpt:?}")]
    NoJsonObject { excerpt: String },

    #[error("model output is not a valid record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parses model output into `T`, or explains why it could not.
pub fn parse_record<T: DeserializeOwned>(raw: &str) -> Result<T, EvaluationError> {
    let text = strip_json_fences(raw);
    if text.is_empty() {
        return Err(EvaluationError::Empty);
    }

    let first_attempt = match serde_json::from_str::<T>(text) {
        Ok(record) => return Ok(record),
        Err(e) => e,
    };

    match object_span(text) {
        Some(span) if span.len() < text.len() => Ok(serde_json::from_str(span)?),
        Some(_) => Err(EvaluationError::Malformed(first_attempt)),
        None => Err(EvaluationError::NoJsonObject {
            excerpt: text.chars().take(EXCERPT_CHARS).collect(),
        }),
    }
}

/// The slice from the first `{` to the last `}`, inclusive.
fn object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
