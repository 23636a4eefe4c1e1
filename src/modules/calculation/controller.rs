use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::crud::CalculationCrud;
use super::model::Calculation;
use super::operation::{normalise, parse_numbers, Operation};
use super::schema::{CalculateRequest, CalculationSearch};
use crate::error::AppResult;
use crate::modules::common::{ApiResponse, PageQuery, Paginated};
use crate::services::guard::AuthMathematician;
use crate::AppState;

const NOT_FOUND: &str = "calculation not found";

// =============================================================================
// POST /calculations
// =============================================================================

pub async fn calculate(
    State(state): State<Arc<AppState>>,
    mathematician: AuthMathematician,
    Json(req): Json<CalculateRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Calculation>>)> {
    let operation: Operation = req.operation.parse()?;
    let numbers = parse_numbers(&req.numbers)?;
    // evaluated before anything is written, so a failed fold persists nothing
    let result = operation.apply(&numbers)?;

    let calculation = CalculationCrud::new(state.db.clone())
        .create(mathematician.mathematician_id, operation, &normalise(&numbers), result)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("calculation saved", calculation)),
    ))
}

// =============================================================================
// GET /calculations
// =============================================================================

pub async fn list_calculations(
    State(state): State<Arc<AppState>>,
    mathematician: AuthMathematician,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<Paginated<Calculation>>>> {
    let calculations = CalculationCrud::new(state.db.clone())
        .list(mathematician.mathematician_id, None, page.checked()?)
        .await?;
    Ok(Json(ApiResponse::success("calculations retrieved", calculations)))
}

// =============================================================================
// GET /calculations/search
// =============================================================================

pub async fn search_calculations(
    State(state): State<Arc<AppState>>,
    mathematician: AuthMathematician,
    Query(page): Query<PageQuery>,
    Query(search): Query<CalculationSearch>,
) -> AppResult<Json<ApiResponse<Paginated<Calculation>>>> {
    let operation: Operation = search.operation.parse()?;
    let calculations = CalculationCrud::new(state.db.clone())
        .list(mathematician.mathematician_id, Some(operation), page.checked()?)
        .await?;
    Ok(Json(ApiResponse::success("calculations retrieved", calculations)))
}

// =============================================================================
// GET /calculations/recent
// =============================================================================

pub async fn recent_calculations(
    State(state): State<Arc<AppState>>,
    mathematician: AuthMathematician,
) -> AppResult<Json<ApiResponse<Vec<Calculation>>>> {
    let recent = CalculationCrud::new(state.db.clone())
        .list(mathematician.mathematician_id, None, PageQuery::default())
        .await?;
    Ok(Json(ApiResponse::success("recent calculations", recent.items)))
}

// =============================================================================
// GET /calculations/{id}
// =============================================================================

pub async fn get_calculation(
    State(state): State<Arc<AppState>>,
    mathematician: AuthMathematician,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Calculation>>> {
    let response = match CalculationCrud::new(state.db.clone())
        .find(mathematician.mathematician_id, id)
        .await?
    {
        Some(calculation) => ApiResponse::success("calculation retrieved", calculation),
        None => ApiResponse::failure(NOT_FOUND),
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /calculations/{id}
// =============================================================================

pub async fn delete_calculation(
    State(state): State<Arc<AppState>>,
    mathematician: AuthMathematician,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = CalculationCrud::new(state.db.clone())
        .delete(mathematician.mathematician_id, id)
        .await?;
    let response = if deleted {
        ApiResponse::done("calculation deleted")
    } else {
        ApiResponse::failure(NOT_FOUND)
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /calculations
// =============================================================================

pub async fn delete_all_calculations(
    State(state): State<Arc<AppState>>,
    mathematician: AuthMathematician,
) -> AppResult<Json<ApiResponse<u64>>> {
    let deleted = CalculationCrud::new(state.db.clone())
        .delete_all(mathematician.mathematician_id)
        .await?;
    Ok(Json(ApiResponse::success("calculations deleted", deleted)))
}
