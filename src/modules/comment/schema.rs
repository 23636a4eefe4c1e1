use serde::Deserialize;
use validator::Validate;

pub use crate::modules::blog::schema::{DiscoverQuery, Sorting};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    pub blog_id: i64,
    #[validate(length(min = 1, max = 2000, message = "content must be 1-2000 characters"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "content must be 1-2000 characters"))]
    pub content: Option<String>,
}

// GET /comments optionally narrows to one blog
#[derive(Debug, Default, Deserialize)]
pub struct CommentFilter {
    pub blog_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CommentSearch {
    #[serde(default)]
    pub username: String,
}
