use serde::{Deserialize, Serialize};

use super::model::{Reaction, ReactionsSummary};

#[derive(Debug, Deserialize)]
pub struct ReactRequest {
    pub kind: String,
    pub blog_id: Option<i64>,
    pub comment_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ReactionResponse {
    pub reaction: Reaction,
    /// `false` when an earlier reaction was overwritten
    pub created: bool,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub target_id: i64,
    pub total: i64,
    pub reactions: ReactionsSummary,
}
