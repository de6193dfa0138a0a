//! Signup and login DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};
use userhub_core::serde::trim_string;
use utoipa::ToSchema;
use validator::Validate;

use crate::users::UserResponse;
use crate::value_types::Email;

#[derive(Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(deserialize_with = "trim_string")]
    #[validate(length(min = 1, message = "fullName is required"))]
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    pub email: Email,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    #[schema(example = "password123")]
    pub password: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    pub email: Email,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    #[schema(example = "password123")]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Successful login: a bearer token and the authenticated user.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_parses_camel_case_and_trims() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"fullName":"  Ada Lovelace ","email":"ada@example.com","password":"password123"}"#,
        )
        .unwrap();
        assert_eq!(req.full_name, "Ada Lovelace");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_signup_request_blank_name_fails_validation() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"fullName":"   ","email":"ada@example.com","password":"password123"}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_signup_request_short_password_fails_validation() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"fullName":"Ada","email":"ada@example.com","password":"short"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_login_request_rejects_invalid_email() {
        let result =
            serde_json::from_str::<LoginRequest>(r#"{"email":"nope","password":"password123"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_never_prints_passwords() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"email":"ada@example.com","password":"hunter2hunter2"}"#)
                .unwrap();
        assert!(!format!("{:?}", req).contains("hunter2"));
    }
}
