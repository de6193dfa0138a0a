use axum::extract::{Path, State};
use tracing::instrument;
use userhub_core::{ApiResponse, AppError, PaginationParams};
use userhub_models::{UserStatus, UsersPage};

use super::service::AdminService;
use crate::docs::{ErrorResponse, MessageResponse};
use crate::middleware::role::RequireAdmin;
use crate::state::AppState;
use crate::validator::ValidatedQuery;

/// List all users, newest first
#[utoipa::path(
    get,
    path = "/admin/users",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of users; payload in `data`", body = UsersPage),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state, admin), fields(admin_id = %admin.user_id()))]
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<ApiResponse<UsersPage>, AppError> {
    let page = AdminService::list_users(state.store.as_ref(), params).await?;
    Ok(ApiResponse::data(page))
}

/// Activate a user account
#[utoipa::path(
    patch,
    path = "/admin/users/{id}/activate",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User activated successfully", body = MessageResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin, or target is an admin or the caller", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state, admin), fields(admin_id = %admin.user_id()))]
pub async fn activate_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    AdminService::set_status(state.store.as_ref(), admin.user_id(), &id, UserStatus::Active)
        .await?;
    Ok(ApiResponse::message("User activated successfully"))
}

/// Deactivate a user account
#[utoipa::path(
    patch,
    path = "/admin/users/{id}/deactivate",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deactivated successfully", body = MessageResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin, or target is an admin or the caller", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip(state, admin), fields(admin_id = %admin.user_id()))]
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    AdminService::set_status(
        state.store.as_ref(),
        admin.user_id(),
        &id,
        UserStatus::Inactive,
    )
    .await?;
    Ok(ApiResponse::message("User deactivated successfully"))
}
