use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::api::{handle_form_submission, AppState};
use crate::handlers::health::health_check;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    if app_state.webhook_auth_token.is_some() {
        info!("Webhook endpoint requires an auth token");
    }

    Router::new()
        .route("/health", get(health_check))
        .route("/webhook/form-submission", post(handle_form_submission))
        .with_state(app_state)
}
