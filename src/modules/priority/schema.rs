use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePriorityRequest {
    #[validate(range(min = 0.0, message = "essentials must not be negative"))]
    pub essentials: f64,
    #[validate(range(min = 0.0, message = "extras must not be negative"))]
    pub extras: f64,
    #[validate(range(min = 0.0, message = "income must not be negative"))]
    pub income: f64,
}

#[derive(Debug, Deserialize)]
pub struct PrioritySearch {
    pub verdict: String,
}
