//! The per-invocation alarm handler.

use crate::config::Config;
use crate::core::{AlarmEventBatch, ChatMessage};
use crate::error::NotifierError;
use crate::formatting::{SlackTextFormatter, TextFormatter};
use crate::notification::{SlackClient, WebhookClient};
use crate::watchlist::WatchedAlarms;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Log `action` recorded for every forwarded alarm.
pub const SEND_ACTION: &str = "Sending message to Slack";

/// Filters alarm notifications and forwards the watched ones to a webhook.
///
/// Built once per process; `handle` is then called once per delivered batch.
pub struct AlarmNotifier {
    watched: WatchedAlarms,
    formatter: Box<dyn TextFormatter>,
    client: Option<Arc<dyn WebhookClient>>,
}

impl AlarmNotifier {
    /// Creates a notifier. A `None` client disables delivery entirely.
    pub fn new(
        watched: WatchedAlarms,
        formatter: Box<dyn TextFormatter>,
        client: Option<Arc<dyn WebhookClient>>,
    ) -> Self {
        Self {
            watched,
            formatter,
            client,
        }
    }

    /// Builds the production notifier: Slack formatting, and a Slack client
    /// when a webhook is configured.
    pub fn from_config(config: &Config) -> Self {
        let client = config.webhook_url().map(|url| {
            Arc::new(SlackClient::new(url.to_string()).with_timeout(config.request_timeout()))
                as Arc<dyn WebhookClient>
        });
        Self::new(
            WatchedAlarms::for_environment(&config.environment),
            Box::new(SlackTextFormatter),
            client,
        )
    }

    pub fn watched(&self) -> &WatchedAlarms {
        &self.watched
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Processes a raw event as delivered by the platform.
    ///
    /// Without a configured webhook the event is not inspected at all, so
    /// any input succeeds. Otherwise it must decode as an SNS batch.
    pub async fn handle_event(&self, event: Value) -> Result<(), NotifierError> {
        if !self.is_enabled() {
            debug!("No webhook configured, ignoring event");
            return Ok(());
        }
        let batch: AlarmEventBatch = serde_json::from_value(event)?;
        self.handle(&batch).await
    }

    /// Processes a batch in order.
    ///
    /// Without a configured webhook this returns immediately. Otherwise the
    /// first malformed record or failed delivery aborts the batch, and the
    /// remaining records are not looked at.
    pub async fn handle(&self, batch: &AlarmEventBatch) -> Result<(), NotifierError> {
        let Some(client) = &self.client else {
            debug!(
                records = batch.records.len(),
                "No webhook configured, ignoring batch"
            );
            return Ok(());
        };

        for record in &batch.records {
            let alarm = record.alarm_message()?;

            if !self.watched.contains(&alarm.alarm_name) {
                debug!(alarm_name = %alarm.alarm_name, "Alarm is not watched, skipping");
                continue;
            }

            let message = ChatMessage::new(self.formatter.format(&alarm));
            info!(
                alarm_name = %alarm.alarm_name.to_lowercase(),
                action = SEND_ACTION,
                message = %message
            );

            client.send(&message).await?;
        }

        Ok(())
    }
}
