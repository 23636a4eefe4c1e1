use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::modules::reaction::ReactionsSummary;

/// Blog post with its author and reaction counts, as every read returns it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogView {
    pub id: i64,
    pub user_id: i64,
    pub author: String,
    pub title: String,
    pub content: String,
    pub comments_count: i64,
    pub share_count: i64,
    pub reacts_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub reactions: ReactionsSummary,
}
