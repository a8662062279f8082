//! Explicit event subscription between the forms subsystem and its handlers.
//!
//! Handlers are registered once at startup under an event name and are run
//! in registration order each time that event is dispatched.

use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::models::form::{FormDefinition, SubmissionEntry};
use crate::services::forwarder::SubmissionForwarder;

/// Raised by the forms subsystem after a submission has been finalized.
pub const AFTER_SUBMISSION: &str = "form_after_submission";

/// Something that reacts to a finalized submission.
///
/// Handlers must not fail: whatever goes wrong stays inside the handler.
pub trait SubmissionHandler: Send + Sync {
    fn on_submission<'a>(
        &'a self,
        entry: &'a SubmissionEntry,
        form: &'a FormDefinition,
    ) -> BoxFuture<'a, ()>;
}

#[derive(Default, Clone)]
pub struct HookRegistry {
    handlers: HashMap<String, Vec<Arc<dyn SubmissionHandler>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, event_name: &str, handler: Arc<dyn SubmissionHandler>) {
        debug!("Registering handler for {}", event_name);
        self.handlers
            .entry(event_name.to_string())
            .or_default()
            .push(handler);
    }

    pub fn handler_count(&self, event_name: &str) -> usize {
        self.handlers.get(event_name).map_or(0, Vec::len)
    }

    /// Run every handler registered for `event_name`, one after another.
    /// Returns how many handlers ran.
    pub async fn dispatch(
        &self,
        event_name: &str,
        entry: &SubmissionEntry,
        form: &FormDefinition,
    ) -> usize {
        let Some(handlers) = self.handlers.get(event_name) else {
            return 0;
        };

        for handler in handlers {
            handler.on_submission(entry, form).await;
        }

        handlers.len()
    }
}

/// Subscribe the forwarder to finalized submissions.
pub fn register_forwarder(registry: &mut HookRegistry, forwarder: SubmissionForwarder) {
    registry.register(AFTER_SUBMISSION, Arc::new(forwarder));
}
