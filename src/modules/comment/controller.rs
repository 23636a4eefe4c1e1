use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use super::crud::CommentCrud;
use super::model::CommentView;
use super::schema::{
    CommentFilter, CommentSearch, CreateCommentRequest, DiscoverQuery, Sorting, UpdateCommentRequest,
};
use crate::error::AppResult;
use crate::modules::common::{ApiResponse, PageQuery, Paginated};
use crate::services::guard::AuthUser;
use crate::AppState;

const NOT_FOUND: &str = "comment not found";

// =============================================================================
// POST /comments
// =============================================================================

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CommentView>>)> {
    req.validate()?;

    match CommentCrud::new(state.db.clone())
        .create(user.user_id, req.blog_id, req.content.trim())
        .await?
    {
        Some(comment) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success("comment created", comment)),
        )),
        None => Ok((StatusCode::OK, Json(ApiResponse::failure("blog not found")))),
    }
}

// =============================================================================
// GET /comments
// =============================================================================

pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(page): Query<PageQuery>,
    Query(filter): Query<CommentFilter>,
) -> AppResult<Json<ApiResponse<Paginated<CommentView>>>> {
    let comments = CommentCrud::new(state.db.clone())
        .list(filter.blog_id, page.checked()?, Sorting::Recent)
        .await?;
    Ok(Json(ApiResponse::success("comments retrieved", comments)))
}

// =============================================================================
// GET /comments/search
// =============================================================================

pub async fn search_comments(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(page): Query<PageQuery>,
    Query(search): Query<CommentSearch>,
) -> AppResult<Json<ApiResponse<Paginated<CommentView>>>> {
    let comments = CommentCrud::new(state.db.clone())
        .search_by_username(&search.username, page.checked()?)
        .await?;
    Ok(Json(ApiResponse::success("comments retrieved", comments)))
}

// =============================================================================
// GET /comments/discover
// =============================================================================

pub async fn discover_comments(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(page): Query<PageQuery>,
    Query(discover): Query<DiscoverQuery>,
) -> AppResult<Json<ApiResponse<Paginated<CommentView>>>> {
    let comments = CommentCrud::new(state.db.clone())
        .list(None, page.checked()?, discover.sorting)
        .await?;
    Ok(Json(ApiResponse::success("comments retrieved", comments)))
}

// =============================================================================
// GET /comments/{id}
// =============================================================================

pub async fn get_comment(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<CommentView>>> {
    let response = match CommentCrud::new(state.db.clone()).find(id).await? {
        Some(comment) => ApiResponse::success("comment retrieved", comment),
        None => ApiResponse::failure(NOT_FOUND),
    };
    Ok(Json(response))
}

// =============================================================================
// PATCH /comments/{id}
// =============================================================================

pub async fn update_comment(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCommentRequest>,
) -> AppResult<Json<ApiResponse<CommentView>>> {
    req.validate()?;

    let response = match CommentCrud::new(state.db.clone())
        .update(user.user_id, id, req.content.as_deref().map(str::trim))
        .await?
    {
        Some(comment) => ApiResponse::success("comment updated", comment),
        None => ApiResponse::failure(NOT_FOUND),
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /comments/{id}
// =============================================================================

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let response = if CommentCrud::new(state.db.clone()).delete(user.user_id, id).await? {
        ApiResponse::done("comment deleted")
    } else {
        ApiResponse::failure(NOT_FOUND)
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /comments
// =============================================================================

pub async fn delete_all_comments(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<u64>>> {
    let deleted = CommentCrud::new(state.db.clone()).delete_all(user.user_id).await?;
    Ok(Json(ApiResponse::success("comments deleted", deleted)))
}
