use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use super::crud::TaskCrud;
use super::model::{CompletionOutcome, Task};
use super::schema::{CreateTaskRequest, TaskFilter, TaskSearch, UpdateTaskRequest};
use crate::error::AppResult;
use crate::modules::common::{ApiResponse, PageQuery, Paginated};
use crate::services::guard::AuthUser;
use crate::AppState;

const NOT_FOUND: &str = "task not found";

// =============================================================================
// POST /tasks
// =============================================================================

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Task>>)> {
    req.validate()?;

    let task = TaskCrud::new(state.db.clone())
        .create(user.user_id, req.description.trim(), req.days_to_execution, Utc::now())
        .await?;
    tracing::debug!(task_id = task.id, user_id = user.user_id, "task created");

    Ok((StatusCode::CREATED, Json(ApiResponse::success("task created", task))))
}

// =============================================================================
// GET /tasks
// =============================================================================

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(page): Query<PageQuery>,
    Query(filter): Query<TaskFilter>,
) -> AppResult<Json<ApiResponse<Paginated<Task>>>> {
    let page = page.checked()?;
    let tasks = TaskCrud::new(state.db.clone())
        .list(user.user_id, &filter, page)
        .await?;

    Ok(Json(ApiResponse::success("tasks retrieved", tasks)))
}

// =============================================================================
// GET /tasks/search
// =============================================================================

pub async fn search_tasks(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(page): Query<PageQuery>,
    Query(search): Query<TaskSearch>,
) -> AppResult<Json<ApiResponse<Paginated<Task>>>> {
    let page = page.checked()?;
    let tasks = TaskCrud::new(state.db.clone())
        .search(user.user_id, &search.description, page)
        .await?;

    Ok(Json(ApiResponse::success("tasks retrieved", tasks)))
}

// =============================================================================
// GET /tasks/{id}
// =============================================================================

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Task>>> {
    let response = match TaskCrud::new(state.db.clone()).find(user.user_id, id).await? {
        Some(task) => ApiResponse::success("task retrieved", task),
        None => ApiResponse::failure(NOT_FOUND),
    };
    Ok(Json(response))
}

// =============================================================================
// PATCH /tasks/{id}
// =============================================================================

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> AppResult<Json<ApiResponse<Task>>> {
    req.validate()?;

    let description = req.description.as_deref().map(str::trim);
    let response = match TaskCrud::new(state.db.clone())
        .update(user.user_id, id, description)
        .await?
    {
        Some(task) => ApiResponse::success("task updated", task),
        None => ApiResponse::failure(NOT_FOUND),
    };
    Ok(Json(response))
}

// =============================================================================
// POST /tasks/{id}/complete
// =============================================================================

pub async fn complete_task(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Task>>> {
    let outcome = TaskCrud::new(state.db.clone())
        .complete(user.user_id, id, Utc::now())
        .await?;

    let response = match outcome {
        CompletionOutcome::Completed(task) => ApiResponse::success("task marked complete", task),
        CompletionOutcome::NotFound => ApiResponse::failure(NOT_FOUND),
        CompletionOutcome::NotEligible(task) => {
            tracing::debug!(task_id = task.id, status = ?task.status, "completion refused");
            ApiResponse::failure("task is no longer pending or its deadline has passed")
        }
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /tasks/{id}
// =============================================================================

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = TaskCrud::new(state.db.clone()).delete(user.user_id, id).await?;
    let response = if deleted {
        ApiResponse::done("task deleted")
    } else {
        ApiResponse::failure(NOT_FOUND)
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /tasks
// =============================================================================

pub async fn delete_all_tasks(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<u64>>> {
    let deleted = TaskCrud::new(state.db.clone()).delete_all(user.user_id).await?;
    Ok(Json(ApiResponse::success("tasks deleted", deleted)))
}
