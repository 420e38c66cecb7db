use crate::domain::ports::NotificationSender;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared buffer of formatted notifications.
///
/// Senders append here instead of talking to a real email/SMS gateway; the
/// CLI drains it after processing and tests assert on its contents.
#[derive(Default, Clone)]
pub struct Outbox {
    messages: Arc<RwLock<Vec<String>>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, message: String) {
        self.messages.write().await.push(message);
    }

    /// Removes and returns every buffered notification.
    pub async fn drain(&self) -> Vec<String> {
        let mut messages = self.messages.write().await;
        messages.drain(..).collect()
    }
}

/// Notification sender for the email channel.
#[derive(Clone)]
pub struct EmailSender {
    outbox: Outbox,
}

impl EmailSender {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }
}

#[async_trait]
impl NotificationSender for EmailSender {
    async fn send_notification(&self, customer: u32, message: &str) -> Result<()> {
        self.outbox
            .push(format!(
                "Notification with message: '{message}' sent by Email to user with ID: {customer}"
            ))
            .await;
        Ok(())
    }
}

/// Notification sender for the SMS channel.
#[derive(Clone)]
pub struct SmsSender {
    outbox: Outbox,
}

impl SmsSender {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }
}

#[async_trait]
impl NotificationSender for SmsSender {
    async fn send_notification(&self, customer: u32, message: &str) -> Result<()> {
        self.outbox
            .push(format!(
                "Notification with message: '{message}' sent by SMS to user with ID: {customer}"
            ))
            .await;
        Ok(())
    }
}
