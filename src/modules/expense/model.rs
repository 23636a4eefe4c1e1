use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub income: f64,
    pub days_until_next_income: i64,
    pub savings_percentage: f64,
    pub feasible_budget: f64,
    pub savings_budget: f64,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}
