//! Daily spending plan for the period until the next income.

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct SpendingPlan {
    /// Amount that can be spent per day without running out before payday.
    pub feasible_budget: f64,
    /// Daily amount that still leaves `savings_percentage` of income untouched.
    pub savings_budget: f64,
    pub summary: String,
}

pub fn plan_spending(
    income: f64,
    days_until_next_income: i64,
    savings_percentage: f64,
) -> Result<SpendingPlan, AppError> {
    if !income.is_finite() || income < 0.0 {
        return Err(AppError::Validation("income must be a non-negative number".to_string()));
    }
    if days_until_next_income < 1 {
        return Err(AppError::Validation(
            "days_until_next_income must be at least 1".to_string(),
        ));
    }
    if !(0.0..=100.0).contains(&savings_percentage) {
        return Err(AppError::Validation(
            "savings_percentage must be between 0 and 100".to_string(),
        ));
    }

    let feasible_budget = income / days_until_next_income as f64;
    let savings_budget = feasible_budget * (100.0 - savings_percentage) / 100.0;

    let summary = format!(
        "amount you can spend per day without getting broke: {:.2}, \
         amount you can spend per day and end up saving {} percent of your income: {:.2}",
        feasible_budget, savings_percentage, savings_budget
    );

    Ok(SpendingPlan {
        feasible_budget,
        savings_budget,
        summary,
    })
}
