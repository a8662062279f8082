use chrono::Utc;
use futures::future::BoxFuture;
use mockall::mock;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::client::WebhookTransport;
use crate::models::webhook::{DeliveryResult, WebhookResponse};

// Define a mock transport for the outbound webhook
mock! {
    pub Transport {}

    impl WebhookTransport for Transport {
        fn post_json(&self, url: &str, body: String) -> BoxFuture<'static, DeliveryResult>;
    }
}

// Every (url, body) pair the mock was asked to send
pub type SentRequests = Arc<Mutex<Vec<(String, String)>>>;

pub fn completed(status: u16, body: &str) -> DeliveryResult {
    DeliveryResult::Completed(WebhookResponse {
        status,
        headers: BTreeMap::new(),
        body: body.to_string(),
        completed_at: Utc::now(),
    })
}

// Helper function to set up a mock transport that answers every request with `result`
pub fn setup_mock_transport(result: DeliveryResult) -> (MockTransport, SentRequests) {
    let sent: SentRequests = Arc::new(Mutex::new(Vec::new()));
    let sent_ref = Arc::clone(&sent);

    let mut mock_transport = MockTransport::new();
    mock_transport
        .expect_post_json()
        .returning(move |url, body| {
            sent_ref.lock().unwrap().push((url.to_string(), body));
            let result = result.clone();
            Box::pin(async move { result })
        });

    (mock_transport, sent)
}
