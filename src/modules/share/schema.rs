use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateShareRequest {
    pub blog_id: i64,
    #[validate(length(max = 2000, message = "content must be at most 2000 characters"))]
    #[serde(default)]
    pub content: String,
    pub kind: Option<String>,
}
