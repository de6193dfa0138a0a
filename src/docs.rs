use serde::Serialize;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::modules::health::controller::HealthStatus;
use userhub_core::PaginationMeta;
use userhub_models::{
    ChangePasswordRequest, LoginRequest, LoginResponse, Role, SignupRequest, UpdateProfileRequest,
    UserDetails, UserResponse, UserStatus, UsersPage,
};

/// Success envelope without a payload.
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = true)]
    pub success: bool,
    pub message: String,
    pub errors: Vec<String>,
}

/// Failure envelope. `errors` holds field-level detail, if any.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Validation error")]
    pub message: String,
    pub errors: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::root,
        crate::modules::health::controller::health,
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::me,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_profile,
        crate::modules::users::controller::change_password,
        crate::modules::admin::controller::list_users,
        crate::modules::admin::controller::activate_user,
        crate::modules::admin::controller::deactivate_user,
    ),
    components(
        schemas(
            Role,
            UserStatus,
            SignupRequest,
            LoginRequest,
            LoginResponse,
            UserResponse,
            UserDetails,
            UpdateProfileRequest,
            ChangePasswordRequest,
            UsersPage,
            PaginationMeta,
            HealthStatus,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and health checks"),
        (name = "Authentication", description = "Signup, login and token introspection"),
        (name = "Users", description = "Self-service profile management"),
        (name = "Admin", description = "Account administration (ADMIN only)")
    ),
    info(
        title = "userhub API",
        version = "0.1.0",
        description = "User management API: email/password accounts, JWT sessions and an admin panel.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/health",
            "/auth/signup",
            "/auth/login",
            "/auth/me",
            "/users/me",
            "/users/me/password",
            "/admin/users",
            "/admin/users/{id}/activate",
            "/admin/users/{id}/deactivate",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
