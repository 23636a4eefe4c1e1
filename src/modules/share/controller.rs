use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use super::crud::ShareCrud;
use super::model::{Share, ShareKind};
use super::schema::CreateShareRequest;
use crate::error::AppResult;
use crate::modules::common::{ApiResponse, PageQuery, Paginated};
use crate::services::guard::AuthUser;
use crate::AppState;

const NOT_FOUND: &str = "share not found";

// =============================================================================
// POST /shares
// =============================================================================

pub async fn create_share(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<CreateShareRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Share>>)> {
    req.validate()?;
    let kind = req.kind.as_deref().map(str::parse::<ShareKind>).transpose()?;

    match ShareCrud::new(state.db.clone())
        .create(user.user_id, req.blog_id, req.content.trim(), kind)
        .await?
    {
        Some(share) => Ok((StatusCode::CREATED, Json(ApiResponse::success("blog shared", share)))),
        None => Ok((StatusCode::OK, Json(ApiResponse::failure("blog not found")))),
    }
}

// =============================================================================
// GET /shares
// =============================================================================

pub async fn list_shares(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<Paginated<Share>>>> {
    let shares = ShareCrud::new(state.db.clone())
        .list(user.user_id, page.checked()?)
        .await?;
    Ok(Json(ApiResponse::success("shares retrieved", shares)))
}

// =============================================================================
// GET /shares/{id}
// =============================================================================

pub async fn get_share(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Share>>> {
    let response = match ShareCrud::new(state.db.clone()).find(user.user_id, id).await? {
        Some(share) => ApiResponse::success("share retrieved", share),
        None => ApiResponse::failure(NOT_FOUND),
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /shares/{id}
// =============================================================================

pub async fn delete_share(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let response = if ShareCrud::new(state.db.clone()).delete(user.user_id, id).await? {
        ApiResponse::done("share deleted")
    } else {
        ApiResponse::failure(NOT_FOUND)
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /shares
// =============================================================================

pub async fn delete_all_shares(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<u64>>> {
    let deleted = ShareCrud::new(state.db.clone()).delete_all(user.user_id).await?;
    Ok(Json(ApiResponse::success("shares deleted", deleted)))
}
