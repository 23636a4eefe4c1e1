use serde::{Deserialize, Serialize};

/// Transactional email handed to the mail provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Email {
    pub fn welcome(to: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Registered successfully".to_string(),
            body: "Welcome aboard, we hope you enjoy your experience. Customer support is always \
                   available if you need anything. Thanks for being a partner."
                .to_string(),
        }
    }

    pub fn deadline_missed(to: &str, task_id: i64, description: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Expired deadline".to_string(),
            body: format!(
                "Sorry, your scheduled task #{} ({}) has expired without accomplishment. \
                 Wishing you more strength next time.",
                task_id, description
            ),
        }
    }

    pub fn task_accomplished(to: &str, task_id: i64, description: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Task accomplished!".to_string(),
            body: format!(
                "Congratulations! Your task #{} ({}) was accomplished before the deadline. \
                 Keep it up, cheers.",
                task_id, description
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mail provider rejected message with status {0}")]
    Rejected(u16),
}
