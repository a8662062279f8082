use serde_json::json;
use std::sync::Arc;

use crate::client_mock::{completed, setup_mock_transport, MockTransport};
use crate::models::webhook::{DeliveryResult, SubmissionAck};
use crate::tests::common::{create_test_app, drain_deliveries, submission_event, JANE_BODY};

const URL: &str = "https://hooks.example.com/form";

/// API handler tests
#[cfg(test)]
mod api_tests {
    use super::*;

    // Test for health endpoint
    #[tokio::test]
    async fn test_health_endpoint() {
        let (server, _) = create_test_app(Arc::new(MockTransport::new()), URL, None);

        let response = server.get("/health").await;

        assert_eq!(response.status_code().as_u16(), 200);
        assert_eq!(response.text(), "OK");
    }

    #[tokio::test]
    async fn test_target_form_is_accepted_and_forwarded() {
        let (transport, sent) = setup_mock_transport(completed(200, "ok"));
        let (server, app_state) = create_test_app(Arc::new(transport), URL, None);

        let response = server
            .post("/webhook/form-submission")
            .json(&submission_event(json!(1)))
            .await;

        assert_eq!(response.status_code().as_u16(), 202);
        let ack: SubmissionAck = response.json();
        assert!(ack.success);

        drain_deliveries(&app_state).await;
        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, URL);
        assert_eq!(sent[0].1, JANE_BODY);
    }

    #[tokio::test]
    async fn test_string_form_id_matches_numeric_target() {
        let (transport, sent) = setup_mock_transport(completed(200, "ok"));
        let (server, app_state) = create_test_app(Arc::new(transport), URL, None);

        server
            .post("/webhook/form-submission")
            .json(&submission_event(json!("1")))
            .await
            .assert_status(axum::http::StatusCode::ACCEPTED);

        drain_deliveries(&app_state).await;
        assert_eq!(sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_other_form_is_accepted_but_not_forwarded() {
        let mut transport = MockTransport::new();
        transport.expect_post_json().never();
        let (server, app_state) = create_test_app(Arc::new(transport), URL, None);

        let response = server
            .post("/webhook/form-submission")
            .json(&submission_event(json!(2)))
            .await;

        assert_eq!(response.status_code().as_u16(), 202);
        drain_deliveries(&app_state).await;
    }

    #[tokio::test]
    async fn test_delivery_failure_does_not_affect_response() {
        let (transport, sent) = setup_mock_transport(DeliveryResult::failed("connection refused"));
        let (server, app_state) = create_test_app(Arc::new(transport), URL, None);

        let response = server
            .post("/webhook/form-submission")
            .json(&submission_event(json!(1)))
            .await;

        assert_eq!(response.status_code().as_u16(), 202);
        let ack: SubmissionAck = response.json();
        assert!(ack.success);

        drain_deliveries(&app_state).await;
        assert_eq!(sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_auth_token_is_rejected() {
        let mut transport = MockTransport::new();
        transport.expect_post_json().never();
        let (server, app_state) = create_test_app(Arc::new(transport), URL, Some("test_auth_token_123"));

        let response = server
            .post("/webhook/form-submission")
            .json(&submission_event(json!(1)))
            .expect_failure()
            .await;

        assert_eq!(response.status_code().as_u16(), 401);

        let response = server
            .post("/webhook/form-submission")
            .add_query_param("auth", "wrong")
            .json(&submission_event(json!(1)))
            .expect_failure()
            .await;

        assert_eq!(response.status_code().as_u16(), 401);
        drain_deliveries(&app_state).await;
    }

    #[tokio::test]
    async fn test_valid_auth_token_is_accepted() {
        let (transport, sent) = setup_mock_transport(completed(200, "ok"));
        let (server, app_state) = create_test_app(Arc::new(transport), URL, Some("test_auth_token_123"));

        let response = server
            .post("/webhook/form-submission")
            .add_query_param("auth", "test_auth_token_123")
            .json(&submission_event(json!(1)))
            .await;

        assert_eq!(response.status_code().as_u16(), 202);
        drain_deliveries(&app_state).await;
        assert_eq!(sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_rejected() {
        let mut transport = MockTransport::new();
        transport.expect_post_json().never();
        let (server, app_state) = create_test_app(Arc::new(transport), URL, None);

        let response = server
            .post("/webhook/form-submission")
            .json(&json!({ "entry": { "1": "Jane Doe" } }))
            .expect_failure()
            .await;

        assert!(response.status_code().is_client_error());
        drain_deliveries(&app_state).await;
    }
}
