use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMarketRequest {
    #[validate(range(min = 0, message = "section must not be negative"))]
    pub section: i64,
    #[validate(length(min = 1, max = 100, message = "trade must be 1-100 characters"))]
    pub trade: String,
    #[validate(range(min = 0, message = "traders must not be negative"))]
    pub traders: i64,
    #[validate(range(min = 0.0, message = "sales_per_day must not be negative"))]
    pub sales_per_day: f64,
    #[validate(length(min = 1, max = 100, message = "taxes must be 1-100 characters"))]
    pub taxes: String,
    #[validate(length(min = 1, max = 100, message = "union must be 1-100 characters"))]
    pub union: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMarketRequest {
    #[validate(range(min = 0, message = "section must not be negative"))]
    pub section: Option<i64>,
    #[validate(length(min = 1, max = 100, message = "trade must be 1-100 characters"))]
    pub trade: Option<String>,
    #[validate(range(min = 0, message = "traders must not be negative"))]
    pub traders: Option<i64>,
    #[validate(range(min = 0.0, message = "sales_per_day must not be negative"))]
    pub sales_per_day: Option<f64>,
    #[validate(length(min = 1, max = 100, message = "taxes must be 1-100 characters"))]
    pub taxes: Option<String>,
    #[validate(length(min = 1, max = 100, message = "union must be 1-100 characters"))]
    pub union: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MarketSearch {
    pub trade: Option<String>,
    pub union: Option<String>,
    pub taxes: Option<String>,
}
