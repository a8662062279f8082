//! Form Webhook Forwarder
//!
//! This library receives finalized form submissions from a forms subsystem
//! and forwards one recognized form's submissions to an external webhook as
//! a flat JSON record.
//!
//! # Modules
//!
//! - `hooks`: event subscription between the forms subsystem and handlers
//! - `services::forwarder`: `SubmissionForwarder`, the filter/project/deliver/log pipeline
//! - `services::mapping`: the static field-path table and JSON encoding
//! - `client`: reqwest-based `WebhookClient` behind the `WebhookTransport` seam
//! - `config`: environment-driven `ForwarderConfig`
//!
//! # Delivery
//!
//! Every submission of the target form gets exactly one POST attempt. There
//! is no retry, queue, or persistence, and delivery failures are logged but
//! never reported to whoever submitted the form.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod client_mock;


// Re-export the main API types for ease of use
pub use client::{WebhookClient, WebhookTransport};
pub use config::ForwarderConfig;
pub use error::{ConfigError, ForwarderError};
pub use handlers::api::AppState;
pub use hooks::{register_forwarder, HookRegistry, SubmissionHandler, AFTER_SUBMISSION};
pub use models::form::{FormDefinition, FormId, SubmissionEntry, SubmissionEvent};
pub use models::webhook::{DeliveryResult, ForwardOutcome, OutputRecord};
pub use routes::create_router;
pub use services::forwarder::SubmissionForwarder;
