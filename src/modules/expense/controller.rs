use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::crud::ExpenseCrud;
use super::model::Expense;
use super::planner::plan_spending;
use super::schema::CreateExpenseRequest;
use crate::error::AppResult;
use crate::modules::common::{ApiResponse, PageQuery, Paginated};
use crate::services::guard::AuthUser;
use crate::AppState;

// =============================================================================
// POST /expenses
// =============================================================================

pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<CreateExpenseRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Expense>>)> {
    let plan = plan_spending(req.income, req.days_until_next_income, req.savings_percentage)?;

    let expense = ExpenseCrud::new(state.db.clone())
        .create(user.user_id, &req, plan)
        .await?;

    tracing::info!(
        username = %user.username,
        feasible_budget = expense.feasible_budget,
        savings_budget = expense.savings_budget,
        "spending plan created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "accurately determined your feasible budget",
            expense,
        )),
    ))
}

// =============================================================================
// GET /expenses
// =============================================================================

pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<Paginated<Expense>>>> {
    let expenses = ExpenseCrud::new(state.db.clone())
        .list(user.user_id, page.checked()?)
        .await?;
    Ok(Json(ApiResponse::success("expenses retrieved", expenses)))
}

// =============================================================================
// GET /expenses/{id}
// =============================================================================

pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Expense>>> {
    let response = match ExpenseCrud::new(state.db.clone()).find(user.user_id, id).await? {
        Some(expense) => ApiResponse::success("expense retrieved", expense),
        None => {
            tracing::warn!(username = %user.username, expense_id = id, "expense lookup missed");
            ApiResponse::failure("expense not found")
        }
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /expenses/{id}
// =============================================================================

pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ExpenseCrud::new(state.db.clone()).delete(user.user_id, id).await?;
    let response = if deleted {
        ApiResponse::done("expense deleted")
    } else {
        ApiResponse::failure("expense not found")
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /expenses
// =============================================================================

pub async fn delete_all_expenses(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<u64>>> {
    let deleted = ExpenseCrud::new(state.db.clone()).delete_all(user.user_id).await?;
    tracing::info!(username = %user.username, deleted, "expenses cleared");
    Ok(Json(ApiResponse::success("data wiped", deleted)))
}
