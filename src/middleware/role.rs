//! Role-based authorization.
//!
//! Role checks run strictly after authentication: a role extractor first
//! extracts [`AuthUser`], so a missing or bad token is still a 401, and only
//! then compares the role, answering 403 on mismatch.

use userhub_core::AppError;
use userhub_models::Role;

use crate::middleware::auth::AuthUser;

pub const FORBIDDEN: &str = "Forbidden";

/// Passes only if an identity is present and carries exactly `required`.
pub fn check_role(auth_user: Option<&AuthUser>, required: Role) -> Result<(), AppError> {
    match auth_user {
        Some(user) if user.role() == required => Ok(()),
        _ => Err(AppError::forbidden(FORBIDDEN)),
    }
}

/// Declares an extractor that requires the given role.
///
/// ```ignore
/// require_role!(RequireAdmin, userhub_models::Role::Admin);
///
/// async fn handler(RequireAdmin(admin): RequireAdmin) { /* ... */ }
/// ```
#[macro_export]
macro_rules! require_role {
    ($name:ident, $role:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = userhub_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;

                $crate::middleware::role::check_role(Some(&auth_user), $role)?;

                Ok($name(auth_user))
            }
        }
    };
}

require_role!(RequireAdmin, userhub_models::Role::Admin);

#[cfg(test)]
mod tests {
    use super::*;
    use userhub_auth::Claims;
    use userhub_core::ErrorKind;
    use userhub_models::UserId;

    fn auth_user(role: Role) -> AuthUser {
        AuthUser(Claims {
            user_id: UserId::new(),
            role,
            iat: 0,
            exp: 9_999_999_999,
        })
    }

    #[test]
    fn test_matching_role_passes() {
        assert!(check_role(Some(&auth_user(Role::Admin)), Role::Admin).is_ok());
        assert!(check_role(Some(&auth_user(Role::User)), Role::User).is_ok());
    }

    #[test]
    fn test_other_role_is_forbidden() {
        let err = check_role(Some(&auth_user(Role::User)), Role::Admin).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.public_message(), FORBIDDEN);
    }

    #[test]
    fn test_admin_does_not_satisfy_user_role() {
        let err = check_role(Some(&auth_user(Role::Admin)), Role::User).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_missing_identity_is_forbidden() {
        let err = check_role(None, Role::Admin).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
