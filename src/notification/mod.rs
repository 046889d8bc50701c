//! Delivery of chat messages to external webhooks.
//!
//! The handler only sees the `WebhookClient` trait, so tests can swap the
//! Slack client for a recording mock.
pub mod slack;

pub use slack::{SlackClient, WebhookClient};
