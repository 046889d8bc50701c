//! Error types for a single notifier invocation.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can abort the processing of an alarm event batch.
///
/// None of these are retried locally. They propagate to the caller (the
/// Lambda runtime or the `replay` command), which reports the invocation as
/// failed.
#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Malformed alarm message: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("Webhook rejected notification: status {status}, body: {body}")]
    Delivery { status: StatusCode, body: String },

    #[error("HTTP request to webhook failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Webhook delivery task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
