//! A client for posting chat messages to a Slack incoming webhook.

use crate::core::ChatMessage;
use crate::error::NotifierError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::task;
use tracing::{error, info, instrument};

/// The default timeout for a single webhook request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A trait for clients that can deliver a chat message.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// Delivers one message. Any non-2xx response is an error.
    async fn send(&self, message: &ChatMessage) -> Result<(), NotifierError>;
}

/// A client for sending messages to a Slack webhook.
pub struct SlackClient {
    webhook_url: String,
    timeout: Duration,
}

impl SlackClient {
    /// Creates a new `SlackClient`.
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends the request in a blocking manner.
    fn send_request(
        webhook_url: &str,
        timeout: Duration,
        message: &ChatMessage,
    ) -> Result<(), NotifierError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        let response = client.post(webhook_url).json(message).send();

        match response {
            Ok(res) => {
                if res.status().is_success() {
                    Ok(())
                } else {
                    let status = res.status();
                    let body = res.text().unwrap_or_default();
                    error!(
                        status = %status,
                        body = %body,
                        "Failed to send Slack notification"
                    );
                    Err(NotifierError::Delivery { status, body })
                }
            }
            Err(e) => {
                error!(error = %e, "HTTP request to Slack failed");
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl WebhookClient for SlackClient {
    /// Posts the message to the configured Slack webhook.
    #[instrument(skip_all)]
    async fn send(&self, message: &ChatMessage) -> Result<(), NotifierError> {
        let webhook_url = self.webhook_url.clone();
        let timeout = self.timeout;
        let message = message.clone();

        // The blocking client owns a runtime of its own and must be created
        // and dropped off the async executor.
        let result =
            task::spawn_blocking(move || Self::send_request(&webhook_url, timeout, &message)).await;

        match result {
            Ok(Ok(())) => {
                info!("Successfully sent message to Slack.");
                Ok(())
            }
            Ok(Err(e)) => Err(e),
            Err(e) => {
                error!(error = %e, "Slack notification task failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod slack_client_tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_slack_client_send_success() {
        // Arrange
        let server = MockServer::start().await;
        let message = ChatMessage::new(":white_check_mark: db has recovered");

        Mock::given(method("POST"))
            .and(path("/webhook"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "text": ":white_check_mark: db has recovered" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = SlackClient::new(format!("{}/webhook", server.uri()));

        // Act
        let result = client.send(&message).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_slack_client_handles_server_error() {
        // Arrange
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhook"))
            .respond_with(ResponseTemplate::new(500).set_body_string("invalid_payload"))
            .mount(&server)
            .await;

        let client = SlackClient::new(format!("{}/webhook", server.uri()));

        // Act
        let result = client.send(&ChatMessage::new("text")).await;

        // Assert
        match result {
            Err(NotifierError::Delivery { status, body }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "invalid_payload");
            }
            other => panic!("Expected a delivery error, got {:?}", other),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_slack_client_handles_timeout() {
        // Arrange
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhook"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client = SlackClient::new(format!("{}/webhook", server.uri()))
            .with_timeout(Duration::from_millis(500));

        // Act
        let result = client.send(&ChatMessage::new("text")).await;

        // Assert
        match result {
            Err(NotifierError::Transport(e)) => assert!(e.is_timeout(), "Expected timeout, got {}", e),
            other => panic!("Expected a transport error, got {:?}", other),
        }
    }
}
