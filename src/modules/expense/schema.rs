use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub income: f64,
    pub days_until_next_income: i64,
    pub savings_percentage: f64,
}
