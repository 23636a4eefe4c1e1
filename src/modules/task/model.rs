use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle of a task. Only `pending` rows ever change status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Expired,
    Accomplished,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Expired => "expired",
            Self::Accomplished => "accomplished",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub description: String,
    pub days_to_execution: i64,
    pub deadline: DateTime<Utc>,
    pub complete: bool,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of a user's completion request.
#[derive(Debug)]
pub enum CompletionOutcome {
    Completed(Task),
    NotFound,
    NotEligible(Task),
}
