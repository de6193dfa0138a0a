use axum::extract::State;
use tracing::instrument;
use userhub_core::{ApiResponse, AppError};
use userhub_models::{ChangePasswordRequest, UpdateProfileRequest, UserDetails};

use super::service::UserService;
use crate::docs::{ErrorResponse, MessageResponse};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Profile of the authenticated user
#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Profile; payload in `data`", body = UserDetails),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<ApiResponse<UserDetails>, AppError> {
    let profile = UserService::get_profile(state.store.as_ref(), auth_user.user_id()).await?;
    Ok(ApiResponse::data(profile))
}

/// Update name and/or email of the authenticated user
#[utoipa::path(
    put,
    path = "/users/me",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated successfully", body = MessageResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfileRequest>,
) -> Result<ApiResponse<()>, AppError> {
    UserService::update_profile(state.store.as_ref(), auth_user.user_id(), dto).await?;
    Ok(ApiResponse::message("Profile updated successfully"))
}

/// Change the password of the authenticated user
#[utoipa::path(
    put,
    path = "/users/me/password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password updated successfully", body = MessageResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid token or current password is incorrect", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, auth_user, dto), fields(user_id = %auth_user.user_id()))]
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ChangePasswordRequest>,
) -> Result<ApiResponse<()>, AppError> {
    UserService::change_password(
        state.store.as_ref(),
        &state.hasher,
        auth_user.user_id(),
        dto,
    )
    .await?;
    Ok(ApiResponse::message("Password updated successfully"))
}
