use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct MathematicianCredentials {
    #[validate(length(min = 1, max = 64, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "secret is required"))]
    pub secret: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DeveloperCredentials {
    #[validate(length(min = 1, max = 64, message = "name is required"))]
    pub name: String,
    pub code: u32,
}

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct IdentityTokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}
