use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Calculation {
    pub id: i64,
    pub mathematician_id: i64,
    pub operation: String,
    pub numbers: String,
    pub result: f64,
    pub created_at: DateTime<Utc>,
}
