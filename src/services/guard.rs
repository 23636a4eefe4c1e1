//! Per-route authorization guards.
//!
//! Each guard decodes the bearer token (401 on any decode failure), then
//! requires its own role marker (403 when another role presents a valid
//! token). Handlers receive the typed identity and never see the raw token.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use std::sync::Arc;

use crate::error::AppError;
use crate::services::jwt::{Claims, JwtService, Role};
use crate::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
    pub name: String,
    pub nationality: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthMathematician {
    pub mathematician_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthDeveloper {
    pub developer_id: i64,
    pub name: String,
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

fn verify(jwt: &JwtService, token: Option<&str>) -> Result<Claims, AppError> {
    let token = token.ok_or_else(|| AppError::Unauthenticated("not authenticated".to_string()))?;
    jwt.verify_access_token(token).map_err(|e| {
        tracing::warn!("rejected bearer token: {}", e);
        AppError::from(e)
    })
}

pub fn authorize_user(jwt: &JwtService, token: Option<&str>) -> Result<AuthUser, AppError> {
    let claims = verify(jwt, token)?;
    match claims.role {
        Role::User {
            user_id,
            name,
            nationality,
        } => Ok(AuthUser {
            user_id,
            username: claims.sub,
            name,
            nationality,
        }),
        _ => Err(AppError::Forbidden("unauthorized access".to_string())),
    }
}

pub fn authorize_mathematician(
    jwt: &JwtService,
    token: Option<&str>,
) -> Result<AuthMathematician, AppError> {
    let claims = verify(jwt, token)?;
    match claims.role {
        Role::Mathematician { mathematician_id } => Ok(AuthMathematician {
            mathematician_id,
            name: claims.sub,
        }),
        _ => Err(AppError::Forbidden("you are not a mathematician".to_string())),
    }
}

pub fn authorize_developer(
    jwt: &JwtService,
    token: Option<&str>,
) -> Result<AuthDeveloper, AppError> {
    let claims = verify(jwt, token)?;
    match claims.role {
        Role::Developer { developer_id } => Ok(AuthDeveloper {
            developer_id,
            name: claims.sub,
        }),
        _ => Err(AppError::Forbidden("you are not a developer".to_string())),
    }
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        authorize_user(&state.jwt_service, bearer_token(&parts.headers))
    }
}

impl FromRequestParts<Arc<AppState>> for AuthMathematician {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        authorize_mathematician(&state.jwt_service, bearer_token(&parts.headers))
    }
}

impl FromRequestParts<Arc<AppState>> for AuthDeveloper {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        authorize_developer(&state.jwt_service, bearer_token(&parts.headers))
    }
}
