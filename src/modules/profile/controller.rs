use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use super::schema::ProfileResponse;
use crate::error::AppResult;
use crate::modules::auth::crud::UserCrud;
use crate::modules::auth::schema::UserResponse;
use crate::modules::blog::crud::BlogCrud;
use crate::modules::comment::crud::CommentCrud;
use crate::modules::common::{ApiResponse, PageQuery};
use crate::modules::expense::crud::ExpenseCrud;
use crate::modules::priority::crud::PriorityCrud;
use crate::modules::share::crud::ShareCrud;
use crate::modules::task::crud::TaskCrud;
use crate::modules::task::schema::TaskFilter;
use crate::services::guard::AuthUser;
use crate::AppState;

// =============================================================================
// GET /profile
// =============================================================================

pub async fn view_profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<ProfileResponse>>> {
    let page = page.checked()?;

    let Some(account) = UserCrud::new(state.db.clone()).find_by_id(user.user_id).await? else {
        return Ok(Json(ApiResponse::failure("account not found")));
    };

    let blog_crud = BlogCrud::new(state.db.clone());
    let comment_crud = CommentCrud::new(state.db.clone());
    let task_crud = TaskCrud::new(state.db.clone());
    let share_crud = ShareCrud::new(state.db.clone());
    let expense_crud = ExpenseCrud::new(state.db.clone());
    let priority_crud = PriorityCrud::new(state.db.clone());
    let task_filter = TaskFilter::default();

    let (blogs, comments, tasks, shares, expenses, priorities) = tokio::try_join!(
        blog_crud.list_by_owner(user.user_id, page),
        comment_crud.list_by_owner(user.user_id, page),
        task_crud.list(user.user_id, &task_filter, page),
        share_crud.list(user.user_id, page),
        expense_crud.list(user.user_id, page),
        priority_crud.list(user.user_id, None, page),
    )?;

    tracing::debug!(username = %user.username, page = page.page, "profile assembled");

    Ok(Json(ApiResponse::success(
        "your full profile",
        ProfileResponse {
            user: UserResponse::from(account),
            blogs,
            comments,
            tasks,
            shares,
            expenses,
            priorities,
        },
    )))
}
