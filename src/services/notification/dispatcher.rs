use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::mailer::Mailer;
use super::types::Email;

/// Queues outgoing email so request handlers and scheduler jobs never wait on
/// the mail provider.
#[derive(Clone)]
pub struct NotificationDispatcher {
    sender: UnboundedSender<Email>,
}

impl NotificationDispatcher {
    /// Dispatcher plus the raw receiving end of its queue.
    pub fn channel() -> (Self, UnboundedReceiver<Email>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Dispatcher whose queue is drained by a background delivery worker.
    pub fn spawn(mailer: Arc<dyn Mailer>) -> Self {
        let (dispatcher, receiver) = Self::channel();
        tokio::spawn(deliver_all(receiver, mailer));
        dispatcher
    }

    pub fn enqueue(&self, email: Email) {
        if let Err(e) = self.sender.send(email) {
            tracing::warn!(to = %e.0.to, "notification queue closed, email dropped");
        }
    }
}

/// Drains the queue until every dispatcher handle is dropped.
pub async fn deliver_all(mut receiver: UnboundedReceiver<Email>, mailer: Arc<dyn Mailer>) {
    while let Some(email) = receiver.recv().await {
        match mailer.send(&email).await {
            Ok(status) => {
                tracing::info!(to = %email.to, subject = %email.subject, status, "email delivered");
            }
            Err(e) => {
                tracing::warn!(to = %email.to, subject = %email.subject, "email delivery failed: {}", e);
            }
        }
    }
}
