//! A mock webhook client for testing the handler without HTTP.

use alarm_notifier::notification::WebhookClient;
use alarm_notifier::{ChatMessage, NotifierError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, Default)]
pub struct MockSlackClient {
    pub sent_messages: Arc<Mutex<Vec<ChatMessage>>>,
}

impl MockSlackClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_messages(&self) -> Vec<ChatMessage> {
        self.sent_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookClient for MockSlackClient {
    async fn send(&self, message: &ChatMessage) -> Result<(), NotifierError> {
        self.sent_messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}
