use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use super::crud::ReactionCrud;
use super::model::{ReactionKind, ReactionTarget};
use super::schema::{ReactRequest, ReactionResponse, SummaryResponse};
use crate::error::AppResult;
use crate::modules::common::ApiResponse;
use crate::services::guard::AuthUser;
use crate::AppState;

// =============================================================================
// POST /reactions
// =============================================================================

pub async fn react(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<ReactRequest>,
) -> AppResult<Json<ApiResponse<ReactionResponse>>> {
    let kind: ReactionKind = req.kind.parse()?;
    let target = ReactionTarget::from_ids(req.blog_id, req.comment_id)?;

    let response = match ReactionCrud::new(state.db.clone())
        .upsert(user.user_id, target, kind)
        .await?
    {
        Some((reaction, created)) => {
            let message = if created { "reaction added" } else { "reaction updated" };
            ApiResponse::success(message, ReactionResponse { reaction, created })
        }
        None => ApiResponse::failure(format!("{} not found", target_name(target))),
    };
    Ok(Json(response))
}

// =============================================================================
// GET /reactions/blogs/{id} and /reactions/comments/{id}
// =============================================================================

pub async fn blog_summary(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<SummaryResponse>>> {
    summary(&state, ReactionTarget::Blog(id)).await
}

pub async fn comment_summary(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<SummaryResponse>>> {
    summary(&state, ReactionTarget::Comment(id)).await
}

async fn summary(
    state: &AppState,
    target: ReactionTarget,
) -> AppResult<Json<ApiResponse<SummaryResponse>>> {
    let response = match ReactionCrud::new(state.db.clone()).summary(target).await? {
        Some(reactions) => ApiResponse::success(
            "reactions retrieved",
            SummaryResponse {
                target_id: target.id(),
                total: reactions.total(),
                reactions,
            },
        ),
        None => ApiResponse::failure(format!("{} not found", target_name(target))),
    };
    Ok(Json(response))
}

// =============================================================================
// DELETE /reactions/{id}
// =============================================================================

pub async fn delete_reaction(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let response = if ReactionCrud::new(state.db.clone()).delete(user.user_id, id).await? {
        ApiResponse::done("reaction removed")
    } else {
        ApiResponse::failure("reaction not found")
    };
    Ok(Json(response))
}

fn target_name(target: ReactionTarget) -> &'static str {
    match target {
        ReactionTarget::Blog(_) => "blog",
        ReactionTarget::Comment(_) => "comment",
    }
}
