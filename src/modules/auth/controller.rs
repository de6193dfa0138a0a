use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;
use userhub_core::{ApiResponse, AppError};
use userhub_models::{LoginRequest, LoginResponse, SignupRequest, UserResponse};

use super::service::AuthService;
use crate::docs::{ErrorResponse, MessageResponse};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new account
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, ApiResponse<()>), AppError> {
    AuthService::signup(state.store.as_ref(), &state.hasher, dto).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::message("User registered successfully"),
    ))
}

/// Log in and receive a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful; payload in `data`", body = LoginResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "User is inactive", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse<LoginResponse>, AppError> {
    let response =
        AuthService::login(state.store.as_ref(), &state.hasher, &state.tokens, dto).await?;
    Ok(ApiResponse::data(response))
}

/// The account the bearer token belongs to
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Current user; payload in `data`", body = UserResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<ApiResponse<UserResponse>, AppError> {
    let user = AuthService::current_user(state.store.as_ref(), auth_user.user_id()).await?;
    Ok(ApiResponse::data(user))
}
