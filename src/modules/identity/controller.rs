use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use super::crud::IdentityCrud;
use super::schema::{
    DeveloperCredentials, IdentityResponse, IdentityTokenResponse, MathematicianCredentials,
};
use crate::error::{AppError, AppResult};
use crate::modules::common::ApiResponse;
use crate::services::jwt::Role;
use crate::AppState;

fn require_secret(state: &AppState, secret: &str) -> AppResult<()> {
    if state.config.mathematician_secrets.contains(secret) {
        Ok(())
    } else {
        Err(AppError::Forbidden("unrecognised mathematician secret".to_string()))
    }
}

fn require_code(state: &AppState, code: u32) -> AppResult<()> {
    if state.config.developer_codes.contains(&code) {
        Ok(())
    } else {
        Err(AppError::Forbidden("unrecognised developer code".to_string()))
    }
}

fn token_body(state: &AppState, name: &str, role: Role) -> AppResult<Json<ApiResponse<IdentityTokenResponse>>> {
    let access_token = state.jwt_service.create_access_token(name, role)?;
    Ok(Json(ApiResponse::success(
        "login successful",
        IdentityTokenResponse {
            access_token,
            token_type: "bearer",
            expires_in: state.jwt_service.get_access_token_duration_secs(),
        },
    )))
}

// =============================================================================
// POST /mathematicians/register
// =============================================================================

pub async fn register_mathematician(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MathematicianCredentials>,
) -> AppResult<(StatusCode, Json<ApiResponse<IdentityResponse>>)> {
    req.validate()?;
    require_secret(&state, &req.secret)?;

    let mathematician = IdentityCrud::new(state.db.clone())
        .create_mathematician(req.name.trim(), &req.secret)
        .await?;
    tracing::info!(mathematician_id = mathematician.id, "mathematician registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "mathematician registered",
            IdentityResponse {
                id: mathematician.id,
                name: mathematician.name,
            },
        )),
    ))
}

// =============================================================================
// POST /mathematicians/login
// =============================================================================

pub async fn login_mathematician(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MathematicianCredentials>,
) -> AppResult<Json<ApiResponse<IdentityTokenResponse>>> {
    require_secret(&state, &req.secret)?;

    let mathematician = IdentityCrud::new(state.db.clone())
        .authenticate_mathematician(req.name.trim(), &req.secret)
        .await?;

    token_body(
        &state,
        &mathematician.name,
        Role::Mathematician {
            mathematician_id: mathematician.id,
        },
    )
}

// =============================================================================
// POST /developers/register
// =============================================================================

pub async fn register_developer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeveloperCredentials>,
) -> AppResult<(StatusCode, Json<ApiResponse<IdentityResponse>>)> {
    req.validate()?;
    require_code(&state, req.code)?;

    let developer = IdentityCrud::new(state.db.clone())
        .create_developer(req.name.trim(), req.code)
        .await?;
    tracing::info!(developer_id = developer.id, "developer registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "developer registered",
            IdentityResponse {
                id: developer.id,
                name: developer.name,
            },
        )),
    ))
}

// =============================================================================
// POST /developers/login
// =============================================================================

pub async fn login_developer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeveloperCredentials>,
) -> AppResult<Json<ApiResponse<IdentityTokenResponse>>> {
    require_code(&state, req.code)?;

    let developer = IdentityCrud::new(state.db.clone())
        .authenticate_developer(req.name.trim(), req.code)
        .await?;

    token_body(
        &state,
        &developer.name,
        Role::Developer {
            developer_id: developer.id,
        },
    )
}
