use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use super::budget::{evaluate_budget, Verdict};
use super::crud::PriorityCrud;
use super::model::Priority;
use super::schema::{CreatePriorityRequest, PrioritySearch};
use crate::error::AppResult;
use crate::modules::common::{ApiResponse, PageQuery, Paginated};
use crate::services::guard::AuthUser;
use crate::AppState;

// =============================================================================
// POST /priorities
// =============================================================================

pub async fn create_priority(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<CreatePriorityRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Priority>>)> {
    req.validate()?;

    let assessment = evaluate_budget(req.essentials, req.extras, req.income);
    match assessment.verdict {
        Verdict::Danger | Verdict::Unsafe => tracing::warn!(
            username = %user.username,
            verdict = %assessment.verdict,
            income = req.income,
            "risky budget submitted"
        ),
        _ => tracing::info!(
            username = %user.username,
            verdict = %assessment.verdict,
            "budget evaluated"
        ),
    }

    let message = assessment.message.clone();
    let priority = PriorityCrud::new(state.db.clone())
        .create(user.user_id, &req, assessment)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(message, priority))))
}

// =============================================================================
// GET /priorities
// =============================================================================

pub async fn list_priorities(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<Paginated<Priority>>>> {
    let priorities = PriorityCrud::new(state.db.clone())
        .list(user.user_id, None, page.checked()?)
        .await?;
    Ok(Json(ApiResponse::success("budgets retrieved", priorities)))
}

// =============================================================================
// GET /priorities/search
// =============================================================================

pub async fn search_priorities(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(page): Query<PageQuery>,
    Query(search): Query<PrioritySearch>,
) -> AppResult<Json<ApiResponse<Paginated<Priority>>>> {
    let verdict: Verdict = search.verdict.parse()?;
    let priorities = PriorityCrud::new(state.db.clone())
        .list(user.user_id, Some(verdict), page.checked()?)
        .await?;
    Ok(Json(ApiResponse::success("budgets retrieved", priorities)))
}

// =============================================================================
// GET /priorities/{id}
// =============================================================================

pub async fn get_priority(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Priority>>> {
    let response = match PriorityCrud::new(state.db.clone()).find(user.user_id, id).await? {
        Some(priority) => ApiResponse::success("budget retrieved", priority),
        None => ApiResponse::failure("budget not found"),
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /priorities/{id}
// =============================================================================

pub async fn delete_priority(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = PriorityCrud::new(state.db.clone()).delete(user.user_id, id).await?;
    let response = if deleted {
        ApiResponse::done("budget deleted")
    } else {
        ApiResponse::failure("budget not found")
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /priorities
// =============================================================================

pub async fn delete_all_priorities(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<u64>>> {
    let deleted = PriorityCrud::new(state.db.clone()).delete_all(user.user_id).await?;
    Ok(Json(ApiResponse::success("data wiped", deleted)))
}
