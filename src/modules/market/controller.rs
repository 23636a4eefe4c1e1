use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use super::crud::MarketCrud;
use super::model::Market;
use super::schema::{CreateMarketRequest, MarketSearch, UpdateMarketRequest};
use crate::error::AppResult;
use crate::modules::common::{ApiResponse, PageQuery, Paginated};
use crate::services::guard::AuthDeveloper;
use crate::AppState;

const NOT_FOUND: &str = "market section not found";

// =============================================================================
// POST /markets
// =============================================================================

pub async fn create_market(
    State(state): State<Arc<AppState>>,
    developer: AuthDeveloper,
    Json(req): Json<CreateMarketRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Market>>)> {
    req.validate()?;

    let market = MarketCrud::new(state.db.clone())
        .create(developer.developer_id, &req)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("section developed successfully", market)),
    ))
}

// =============================================================================
// GET /markets
// =============================================================================

pub async fn list_markets(
    State(state): State<Arc<AppState>>,
    developer: AuthDeveloper,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<Paginated<Market>>>> {
    let markets = MarketCrud::new(state.db.clone())
        .list(developer.developer_id, page.checked()?)
        .await?;
    Ok(Json(ApiResponse::success("market sections retrieved", markets)))
}

// =============================================================================
// GET /markets/search
// =============================================================================

pub async fn search_markets(
    State(state): State<Arc<AppState>>,
    developer: AuthDeveloper,
    Query(page): Query<PageQuery>,
    Query(search): Query<MarketSearch>,
) -> AppResult<Json<ApiResponse<Paginated<Market>>>> {
    let markets = MarketCrud::new(state.db.clone())
        .search(developer.developer_id, &search, page.checked()?)
        .await?;
    Ok(Json(ApiResponse::success("market sections retrieved", markets)))
}

// =============================================================================
// GET /markets/sections/{section}
// =============================================================================

pub async fn get_section(
    State(state): State<Arc<AppState>>,
    developer: AuthDeveloper,
    Path(section): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Market>>>> {
    let markets = MarketCrud::new(state.db.clone())
        .find_by_section(developer.developer_id, section)
        .await?;

    let response = if markets.is_empty() {
        ApiResponse::failure("section not found")
    } else {
        ApiResponse::success("section retrieved", markets)
    };
    Ok(Json(response))
}

// =============================================================================
// GET /markets/{id}
// =============================================================================

pub async fn get_market(
    State(state): State<Arc<AppState>>,
    developer: AuthDeveloper,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Market>>> {
    let response = match MarketCrud::new(state.db.clone())
        .find(developer.developer_id, id)
        .await?
    {
        Some(market) => ApiResponse::success("market section retrieved", market),
        None => ApiResponse::failure(NOT_FOUND),
    };
    Ok(Json(response))
}

// =============================================================================
// PATCH /markets/{id}
// =============================================================================

pub async fn update_market(
    State(state): State<Arc<AppState>>,
    developer: AuthDeveloper,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMarketRequest>,
) -> AppResult<Json<ApiResponse<Market>>> {
    req.validate()?;

    let response = match MarketCrud::new(state.db.clone())
        .update(developer.developer_id, id, &req)
        .await?
    {
        Some(market) => ApiResponse::success("update successful", market),
        None => ApiResponse::failure(NOT_FOUND),
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /markets/{id}
// =============================================================================

pub async fn delete_market(
    State(state): State<Arc<AppState>>,
    developer: AuthDeveloper,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = MarketCrud::new(state.db.clone())
        .delete(developer.developer_id, id)
        .await?;
    let response = if deleted {
        ApiResponse::done("market section deleted")
    } else {
        ApiResponse::failure(NOT_FOUND)
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /markets
// =============================================================================

pub async fn delete_all_markets(
    State(state): State<Arc<AppState>>,
    developer: AuthDeveloper,
) -> AppResult<Json<ApiResponse<u64>>> {
    let deleted = MarketCrud::new(state.db.clone())
        .delete_all(developer.developer_id)
        .await?;
    Ok(Json(ApiResponse::success("data successfully wiped", deleted)))
}
