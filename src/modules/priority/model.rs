use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Priority {
    pub id: i64,
    pub user_id: i64,
    pub essentials: f64,
    pub extras: f64,
    pub income: f64,
    pub verdict: String,
    pub message: String,
    pub detail: String,
    pub created_at: DateTime<Utc>,
}
