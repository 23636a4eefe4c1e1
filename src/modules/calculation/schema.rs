use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub operation: String,
    pub numbers: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CalculationSearch {
    #[serde(default)]
    pub operation: String,
}
