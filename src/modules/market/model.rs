use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Market {
    pub id: i64,
    pub developer_id: i64,
    pub section: i64,
    pub trade: String,
    pub traders: i64,
    pub sales_per_day: f64,
    pub taxes: String,
    #[serde(rename = "union")]
    pub trade_union: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
