use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::modules::reaction::ReactionsSummary;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentView {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub blog_id: i64,
    pub content: String,
    pub reacts_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub reactions: ReactionsSummary,
}
