use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use super::types::{Email, MailError};

const SENDGRID_ENDPOINT: &str = "https://api.sendgrid.com/v3/mail/send";

/// Delivers one email and reports the provider's status code
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &Email) -> Result<u16, MailError>;
}

/// SendGrid v3 mail-send client
pub struct SendGridMailer {
    client: Client,
    api_key: String,
    sender: String,
    endpoint: String,
}

impl SendGridMailer {
    pub fn new(api_key: String, sender: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            sender,
            endpoint: SENDGRID_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn payload(&self, email: &Email) -> Value {
        json!({
            "personalizations": [{
                "to": [{ "email": email.to }],
                "subject": email.subject,
            }],
            "from": { "email": self.sender },
            "content": [{ "type": "text/plain", "value": email.body }],
        })
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, email: &Email) -> Result<u16, MailError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.payload(email))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            Err(MailError::Rejected(status.as_u16()))
        }
    }
}

/// Used when no provider is configured; records the message in the log only.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &Email) -> Result<u16, MailError> {
        tracing::info!(to = %email.to, subject = %email.subject, "email delivery skipped (no provider)");
        Ok(202)
    }
}
