use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use userhub_auth::Claims;
use userhub_core::AppError;
use userhub_models::{Role, UserId};

use crate::state::AppState;

pub const UNAUTHORIZED: &str = "Unauthorized";

/// Extractor that validates the bearer token and provides its claims.
///
/// The store is never consulted; a token for a since-deactivated account
/// keeps working until it expires.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> UserId {
        self.0.user_id
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin()
    }
}

/// Returns the token of an `Authorization: Bearer <token>` header.
///
/// Anything else (other schemes, lowercase `bearer`, extra whitespace, an
/// empty token) yields `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;

    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    Some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            bearer_token(&parts.headers).ok_or_else(|| AppError::unauthorized(UNAUTHORIZED))?;

        let claims = state
            .tokens
            .verify(token)
            .map_err(|_| AppError::unauthorized(UNAUTHORIZED))?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_accepts_exact_shape() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_rejects_other_shapes() {
        for value in [
            "abc.def.ghi",
            "Bearer",
            "Bearer ",
            "bearer abc.def.ghi",
            "Basic dXNlcjpwYXNz",
            "Bearer  abc.def.ghi",
            "Bearer abc def",
        ] {
            assert_eq!(bearer_token(&headers(value)), None, "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_accessors() {
        let user = AuthUser(Claims {
            user_id: UserId::from_u128(3),
            role: Role::Admin,
            iat: 0,
            exp: 1,
        });
        assert_eq!(user.user_id(), UserId::from_u128(3));
        assert_eq!(user.role(), Role::Admin);
        assert!(user.is_admin());
    }
}
