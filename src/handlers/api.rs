use axum::{
    extract::{Json as ExtractJson, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio_util::task::TaskTracker;
use tracing::{info, warn};

use crate::hooks::{HookRegistry, AFTER_SUBMISSION};
use crate::models::form::SubmissionEvent;
use crate::models::webhook::SubmissionAck;

// AppState struct containing shared resources
pub struct AppState {
    pub registry: Arc<HookRegistry>,
    pub webhook_auth_token: Option<String>,
    // Background deliveries, drained on shutdown
    pub tracker: TaskTracker,
}

impl AppState {
    pub fn new(registry: HookRegistry, webhook_auth_token: Option<String>) -> Self {
        Self {
            registry: Arc::new(registry),
            webhook_auth_token,
            tracker: TaskTracker::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WebhookQueryParams {
    pub auth: Option<String>,
}

// Form submission webhook handler
//
// Answers as soon as the event is handed off; delivery runs on a tracked
// background task and never changes the response.
pub async fn handle_form_submission(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WebhookQueryParams>,
    ExtractJson(event): ExtractJson<SubmissionEvent>,
) -> Result<(StatusCode, Json<SubmissionAck>), StatusCode> {
    if let Some(expected) = &state.webhook_auth_token {
        if params.auth.as_deref() != Some(expected.as_str()) {
            warn!(
                "Rejected form submission for form {}: missing or invalid auth token",
                event.form.id
            );
            return Err(StatusCode::UNAUTHORIZED);
        }
    }

    info!(
        "Received form submission for form {} with {} fields",
        event.form.id,
        event.entry.len()
    );

    let form_id = event.form.id.clone();
    let registry = Arc::clone(&state.registry);
    state.tracker.spawn(async move {
        registry
            .dispatch(AFTER_SUBMISSION, &event.entry, &event.form)
            .await;
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(SubmissionAck {
            success: true,
            message: format!("Submission for form {} accepted", form_id),
        }),
    ))
}
