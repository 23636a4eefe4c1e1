use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use super::crud::BlogCrud;
use super::model::BlogView;
use super::schema::{BlogSearch, CreateBlogRequest, DiscoverQuery, Sorting, UpdateBlogRequest};
use crate::error::AppResult;
use crate::modules::common::{ApiResponse, PageQuery, Paginated};
use crate::services::guard::AuthUser;
use crate::AppState;

const NOT_FOUND: &str = "blog not found";

// =============================================================================
// POST /blogs
// =============================================================================

pub async fn create_blog(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<CreateBlogRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<BlogView>>)> {
    req.validate()?;

    let blog = BlogCrud::new(state.db.clone())
        .create(user.user_id, req.title.trim(), &req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success("blog created", blog))))
}

// =============================================================================
// GET /blogs
// =============================================================================

pub async fn list_blogs(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<Paginated<BlogView>>>> {
    let blogs = BlogCrud::new(state.db.clone())
        .list(page.checked()?, Sorting::Recent)
        .await?;
    Ok(Json(ApiResponse::success("blogs retrieved", blogs)))
}

// =============================================================================
// GET /blogs/search
// =============================================================================

pub async fn search_blogs(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(page): Query<PageQuery>,
    Query(search): Query<BlogSearch>,
) -> AppResult<Json<ApiResponse<Paginated<BlogView>>>> {
    let blogs = BlogCrud::new(state.db.clone())
        .search(search.title.as_deref(), search.author.as_deref(), page.checked()?)
        .await?;
    Ok(Json(ApiResponse::success("blogs retrieved", blogs)))
}

// =============================================================================
// GET /blogs/discover
// =============================================================================

pub async fn discover_blogs(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(page): Query<PageQuery>,
    Query(discover): Query<DiscoverQuery>,
) -> AppResult<Json<ApiResponse<Paginated<BlogView>>>> {
    let blogs = BlogCrud::new(state.db.clone())
        .list(page.checked()?, discover.sorting)
        .await?;
    Ok(Json(ApiResponse::success("blogs retrieved", blogs)))
}

// =============================================================================
// GET /blogs/{id}
// =============================================================================

pub async fn get_blog(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<BlogView>>> {
    let response = match BlogCrud::new(state.db.clone()).find(id).await? {
        Some(blog) => ApiResponse::success("blog retrieved", blog),
        None => ApiResponse::failure(NOT_FOUND),
    };
    Ok(Json(response))
}

// =============================================================================
// PATCH /blogs/{id}
// =============================================================================

pub async fn update_blog(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBlogRequest>,
) -> AppResult<Json<ApiResponse<BlogView>>> {
    req.validate()?;

    let response = match BlogCrud::new(state.db.clone())
        .update(
            user.user_id,
            id,
            req.title.as_deref().map(str::trim),
            req.content.as_deref(),
        )
        .await?
    {
        Some(blog) => ApiResponse::success("blog updated", blog),
        None => ApiResponse::failure(NOT_FOUND),
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /blogs/{id}
// =============================================================================

pub async fn delete_blog(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let response = if BlogCrud::new(state.db.clone()).delete(user.user_id, id).await? {
        ApiResponse::done("blog deleted")
    } else {
        ApiResponse::failure(NOT_FOUND)
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /blogs
// =============================================================================

pub async fn delete_all_blogs(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<u64>>> {
    let deleted = BlogCrud::new(state.db.clone()).delete_all(user.user_id).await?;
    Ok(Json(ApiResponse::success("blogs deleted", deleted)))
}
