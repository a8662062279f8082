use chrono::Utc;
use futures::future::BoxFuture;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::time::Duration;
use tracing::debug;

use crate::error::ForwarderError;
use crate::models::webhook::{DeliveryResult, WebhookResponse};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Outbound side of the forwarder: one POST of a JSON body, one result.
///
/// Implementations never retry and never return an error; every failure is
/// folded into [`DeliveryResult::Failed`].
pub trait WebhookTransport: Send + Sync {
    fn post_json(&self, url: &str, body: String) -> BoxFuture<'static, DeliveryResult>;
}

/// reqwest-backed webhook client
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
}

impl WebhookClient {
    /// Create a client whose requests are bounded by `timeout` end to end.
    pub fn new(timeout: Duration) -> Result<Self, ForwarderError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    async fn send(client: Client, url: String, body: String) -> DeliveryResult {
        debug!("POST {} ({} bytes)", url, body.len());

        let res = match client
            .post(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
        {
            Ok(res) => res,
            Err(err) => return failure(err),
        };

        let status = res.status().as_u16();
        let headers = res
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect::<BTreeMap<_, _>>();

        // The body can still time out or drop mid-stream
        let body = match res.text().await {
            Ok(body) => body,
            Err(err) => return failure(err),
        };

        DeliveryResult::Completed(WebhookResponse {
            status,
            headers,
            body,
            completed_at: Utc::now(),
        })
    }
}

fn failure(err: reqwest::Error) -> DeliveryResult {
    DeliveryResult::Failed {
        timed_out: err.is_timeout(),
        message: error_chain(&err),
    }
}

// reqwest's Display stops at the outermost error; the cause is further down
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

impl WebhookTransport for WebhookClient {
    fn post_json(&self, url: &str, body: String) -> BoxFuture<'static, DeliveryResult> {
        Box::pin(Self::send(self.client.clone(), url.to_string(), body))
    }
}
