use std::sync::Arc;

use crate::workflow::Workflow;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Each request runs its own pipeline over its own `WorkflowState`.
    pub workflow: Arc<Workflow>,
}
