use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;
use validator::Validate;

use super::crud::UserCrud;
use super::model::NewUser;
use super::schema::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserResponse};
use crate::error::{AppError, AppResult};
use crate::modules::common::ApiResponse;
use crate::services::guard::AuthUser;
use crate::services::hashing;
use crate::services::jwt::{Role, TokenPair};
use crate::services::notification::Email;
use crate::AppState;

pub const REFRESH_COOKIE: &str = "refresh";

/// HttpOnly, same-site refresh cookie; the refresh token never appears in a body.
pub fn refresh_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .secure(secure)
        .build()
}

fn token_response(jar: CookieJar, pair: TokenPair, secure: bool) -> (CookieJar, Json<ApiResponse<LoginResponse>>) {
    let jar = jar.add(refresh_cookie(pair.refresh_token, secure));
    let body = LoginResponse {
        access_token: pair.access_token,
        token_type: "bearer",
        expires_in: pair.expires_in,
    };
    (jar, Json(ApiResponse::success("login successful", body)))
}

// =============================================================================
// POST /auth/register
// =============================================================================

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<RegisterResponse>>)> {
    let req = req.trimmed();
    req.validate()?;

    let password_hash = hashing::hash_password(&req.password)?;

    let user = UserCrud::new(state.db.clone())
        .create(NewUser {
            username: req.username,
            email: req.email,
            password_hash,
            name: req.name,
            age: req.age,
            nationality: req.nationality,
        })
        .await?;

    tracing::info!(user_id = user.id, username = %user.username, "user registered");
    state.notifier.enqueue(Email::welcome(&user.email));

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "account created",
            RegisterResponse {
                id: user.id,
                username: user.username,
                nationality: user.nationality,
            },
        )),
    ))
}

// =============================================================================
// POST /auth/login
// =============================================================================

pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<ApiResponse<LoginResponse>>)> {
    let user = UserCrud::new(state.db.clone())
        .authenticate(&req.username, &req.password)
        .await?;

    let pair = state.jwt_service.create_token_pair(&user.username, user.role())?;
    tracing::info!(user_id = user.id, "user logged in");

    Ok(token_response(jar, pair, state.config.cookie_secure))
}

// =============================================================================
// POST /auth/refresh
// =============================================================================

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<ApiResponse<LoginResponse>>)> {
    let token = jar
        .get(REFRESH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AppError::Unauthenticated("refresh token missing".to_string()))?;

    let claims = state.jwt_service.verify_refresh_token(&token)?;
    let user_id = match claims.role {
        Role::User { user_id, .. } => user_id,
        _ => return Err(AppError::Unauthenticated("invalid refresh token".to_string())),
    };

    // the account may have changed or disappeared since the token was issued
    let user = UserCrud::new(state.db.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthenticated("account no longer exists".to_string()))?;

    let pair = state.jwt_service.create_token_pair(&user.username, user.role())?;
    Ok(token_response(jar, pair, state.config.cookie_secure))
}

// =============================================================================
// POST /auth/logout
// =============================================================================

pub async fn logout(jar: CookieJar) -> (CookieJar, Json<ApiResponse<()>>) {
    let jar = jar.remove(Cookie::build((REFRESH_COOKIE, "")).path("/"));
    (jar, Json(ApiResponse::done("logged out")))
}

// =============================================================================
// GET /auth/me
// =============================================================================

pub async fn me(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    match UserCrud::new(state.db.clone()).find_by_id(user.user_id).await? {
        Some(account) => Ok(Json(ApiResponse::success(
            "account retrieved",
            UserResponse::from(account),
        ))),
        None => Ok(Json(ApiResponse::failure("account not found"))),
    }
}
