//! Axum route handlers for the hiring pipeline.

use std::io::Write;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::workflow::WorkflowState;

const DEFAULT_RESUME_SUFFIX: &str = ".pdf";

#[derive(Debug, Deserialize)]
pub struct RunPipelineRequest {
    pub job_text: String,
    /// Resume file paths readable by the server.
    pub resume_sources: Vec<String>,
}

/// POST /api/v1/pipeline/run
///
/// Runs the full pipeline over resumes already on the server's filesystem.
pub async fn handle_run_pipeline(
    State(state): State<AppState>,
    Json(request): Json<RunPipelineRequest>,
) -> Result<Json<WorkflowState>, AppError> {
    validate_inputs(&request.job_text, request.resume_sources.len())?;

    let final_state = state
        .workflow
        .run(WorkflowState::new(request.job_text, request.resume_sources))
        .await?;

    Ok(Json(final_state))
}

/// POST /api/v1/pipeline/upload
///
/// Multipart form: a `job_text` field plus one or more `resumes` file fields.
/// Uploaded files live in temp files for the duration of the run.
pub async fn handle_upload_pipeline(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<WorkflowState>, AppError> {
    let mut job_text = String::new();
    let mut uploads: Vec<NamedTempFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_text" => {
                job_text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable job_text: {e}")))?;
            }
            "resumes" => {
                let suffix = resume_suffix(field.file_name());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable resume upload: {e}")))?;
                uploads.push(persist_upload(&bytes, &suffix)?);
            }
            _ => {}
        }
    }

    validate_inputs(&job_text, uploads.len())?;
    info!("Received {} resume upload(s)", uploads.len());

    let resume_sources = uploads
        .iter()
        .map(|file| file.path().display().to_string())
        .collect();

    let result = state
        .workflow
        .run(WorkflowState::new(job_text, resume_sources))
        .await;
    drop(uploads);

    Ok(Json(result?))
}

fn validate_inputs(job_text: &str, resume_count: usize) -> Result<(), AppError> {
    if job_text.trim().is_empty() {
        return Err(AppError::Validation("job_text cannot be empty".to_string()));
    }
    if resume_count == 0 {
        return Err(AppError::Validation(
            "at least one resume is required".to_string(),
        ));
    }
    Ok(())
}

/// Keeps the uploaded file's extension so text resumes are not fed to the PDF reader.
fn resume_suffix(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.trim())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_else(|| DEFAULT_RESUME_SUFFIX.to_string())
}

fn persist_upload(bytes: &[u8], suffix: &str) -> Result<NamedTempFile, AppError> {
    let mut file = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(suffix)
        .tempfile()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create temp file: {e}")))?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to store upload: {e}")))?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::routes::build_router;
    use crate::workflow::testing::Harness;
    use crate::workflow::Workflow;

    fn app(harness: &Harness) -> axum::Router {
        build_router(AppState {
            workflow: Arc::new(Workflow::new(harness.collaborators())),
        })
    }

    async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_service() {
        let harness = Harness::with_scores(&[]);
        let response = app(&harness)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["service"], "hiring-copilot");
    }

    #[tokio::test]
    async fn test_run_returns_final_state() {
        let harness = Harness::with_scores(&[("Asha", 80), ("Ben", 30)]);
        let (status, body) = post_json(
            app(&harness),
            "/api/v1/pipeline/run",
            serde_json::json!({"job_text": "Senior Go Engineer", "resume_sources": ["Asha", "Ben"]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["drafts"][0]["decision"], "invite");
        assert_eq!(body["drafts"][1]["decision"], "rejection");
        assert_eq!(body["scheduling"][0]["status"], "scheduled");
        assert_eq!(body["scheduling"][1]["status"], "skipped");
        assert_eq!(body["notifications"][1]["status"]["state"], "sent");
    }

    #[tokio::test]
    async fn test_blank_job_text_is_rejected() {
        let harness = Harness::with_scores(&[]);
        let (status, body) = post_json(
            app(&harness),
            "/api/v1/pipeline/run",
            serde_json::json!({"job_text": "  ", "resume_sources": ["Asha"]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_abort_returns_partial_state() {
        let harness = Harness::with_scores(&[("a", 90), ("b", 90)]).failing_resume(1);
        let (status, body) = post_json(
            app(&harness),
            "/api/v1/pipeline/run",
            serde_json::json!({"job_text": "Senior Go Engineer", "resume_sources": ["a", "b"]}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "PIPELINE_ABORTED");
        assert_eq!(body["error"]["step"], "parse_resumes");
        assert_eq!(body["error"]["category"], "collaborator_output");
        assert_eq!(body["partial_state"]["candidate_profiles"].as_array().unwrap().len(), 1);
        assert!(body["partial_state"]["rankings"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_runs_over_uploaded_files() {
        let harness = Harness::with_scores(&[]);
        let boundary = "copilot-boundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"job_text\"\r\n\r\nSenior Go Engineer\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"resumes\"; filename=\"asha.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n%PDF-1.4 fake\r\n--{b}--\r\n",
            b = boundary
        );
        let response = app(&harness)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/pipeline/upload")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let state: Value = serde_json::from_slice(&bytes).unwrap();
        let source = state["resume_sources"][0].as_str().unwrap();
        assert!(source.ends_with(".pdf"));
        assert_eq!(state["notifications"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_resume_suffix_keeps_simple_extensions() {
        assert_eq!(resume_suffix(Some("Asha CV.PDF")), ".pdf");
        assert_eq!(resume_suffix(Some("notes.txt")), ".txt");
        assert_eq!(resume_suffix(Some("no-extension")), ".pdf");
        assert_eq!(resume_suffix(Some("weird.p/df")), ".pdf");
        assert_eq!(resume_suffix(None), ".pdf");
    }
}
