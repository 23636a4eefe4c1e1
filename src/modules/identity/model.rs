use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

// =============================================================================
// MATHEMATICIAN
// =============================================================================

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mathematician {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing)]
    pub secret_hash: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// DEVELOPER
// =============================================================================

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Developer {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing)]
    pub code_hash: String,
    pub created_at: DateTime<Utc>,
}
