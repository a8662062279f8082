use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::{error, info};

use crate::client::WebhookTransport;
use crate::hooks::SubmissionHandler;
use crate::models::form::{FormDefinition, FormId, SubmissionEntry};
use crate::models::webhook::{DeliveryResult, ForwardOutcome};
use crate::services::mapping::{project, serialize};

/// Forwards submissions of one recognized form to a webhook.
///
/// Each call to [`forward`](Self::forward) makes at most one delivery attempt.
/// Nothing is retried or deduplicated, and no failure is ever returned to the
/// caller: the outcome is logged and handed back only for inspection.
#[derive(Clone)]
pub struct SubmissionForwarder {
    target_form_id: FormId,
    webhook_url: String,
    transport: Arc<dyn WebhookTransport>,
}

impl SubmissionForwarder {
    pub fn new(
        target_form_id: FormId,
        webhook_url: impl Into<String>,
        transport: Arc<dyn WebhookTransport>,
    ) -> Self {
        Self {
            target_form_id,
            webhook_url: webhook_url.into(),
            transport,
        }
    }

    pub async fn forward(&self, entry: &SubmissionEntry, form: &FormDefinition) -> ForwardOutcome {
        if form.id != self.target_form_id {
            return ForwardOutcome::Skipped;
        }

        let record = project(entry);

        let result = match serialize(&record) {
            Ok(body) => self.transport.post_json(&self.webhook_url, body).await,
            Err(e) => DeliveryResult::failed(e.to_string()),
        };

        match &result {
            DeliveryResult::Failed { message, timed_out } => {
                error!(
                    form_id = %form.id,
                    timed_out = *timed_out,
                    "Form webhook error: {}",
                    message
                );
            }
            DeliveryResult::Completed(response) => {
                info!(
                    form_id = %form.id,
                    status = response.status,
                    "Form webhook response: {:?}",
                    response
                );
            }
        }

        ForwardOutcome::Attempted(result)
    }
}

impl SubmissionHandler for SubmissionForwarder {
    fn on_submission<'a>(
        &'a self,
        entry: &'a SubmissionEntry,
        form: &'a FormDefinition,
    ) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            self.forward(entry, form).await;
        })
    }
}
