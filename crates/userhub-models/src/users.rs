//! User domain models and DTOs.
//!
//! [`User`] is the stored entity and is never serialized to clients as-is;
//! handlers answer with [`UserResponse`] or [`UserDetails`], neither of which
//! carries the password hash.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use userhub_core::PaginationMeta;
use userhub_core::serde::trim_optional_string;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::ids::UserId;
use crate::value_types::Email;

/// Coarse permission class of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account enablement flag. Inactive accounts cannot log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as stored in the `users` table.
#[derive(Serialize, FromRow, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: Email,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Values for inserting a new account. The hash must already be computed.
#[derive(Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: Email,
    pub password_hash: String,
    pub role: Role,
    pub status: UserStatus,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// The public identity of a user, as returned by login and `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    pub email: Email,
    pub role: Role,
    pub status: UserStatus,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            status: user.status,
        }
    }
}

/// A user with timestamps, as returned by `/users/me` and the admin list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub id: UserId,
    pub full_name: String,
    pub email: Email,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserDetails {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
            last_login: user.last_login,
        }
    }
}

fn require_any_field(dto: &UpdateProfileRequest) -> Result<(), ValidationError> {
    if dto.full_name.is_none() && dto.email.is_none() {
        let mut err = ValidationError::new("empty_update");
        err.message = Some("at least one of fullName or email is required".into());
        return Err(err);
    }
    Ok(())
}

/// Partial profile update. At least one field must be present.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "require_any_field"))]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "trim_optional_string")]
    #[validate(length(min = 1, message = "fullName must not be empty"))]
    #[schema(example = "Ada King")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<Email>,
}

#[derive(Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 8, message = "currentPassword must be at least 8 characters"))]
    pub current_password: String,
    #[validate(length(min = 8, message = "newPassword must be at least 8 characters"))]
    #[schema(example = "newPassword123")]
    pub new_password: String,
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequest").finish_non_exhaustive()
    }
}

/// One page of the admin user list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersPage {
    pub users: Vec<UserDetails>,
    pub pagination: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: UserId::from_u128(1),
            full_name: "Ada Lovelace".to_string(),
            email: Email::new("ada@example.com").unwrap(),
            password_hash: "$2b$04$abcdefghijklmnopqrstuv".to_string(),
            role: Role::User,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
            last_login: None,
        }
    }

    #[test]
    fn test_role_and_status_serialize_uppercase() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("ADMIN"));
        assert_eq!(
            serde_json::to_value(UserStatus::Inactive).unwrap(),
            json!("INACTIVE")
        );
        assert_eq!(Role::User.to_string(), "USER");
        assert_eq!(UserStatus::Active.to_string(), "ACTIVE");
    }

    #[test]
    fn test_user_never_serializes_password_hash() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert!(value.get("passwordHash").is_none());
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["fullName"], "Ada Lovelace");
    }

    #[test]
    fn test_user_debug_omits_password_hash() {
        let debug = format!("{:?}", sample_user());
        assert!(!debug.contains("$2b$"));
    }

    #[test]
    fn test_user_response_shape() {
        let value = serde_json::to_value(UserResponse::from(&sample_user())).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "00000000-0000-0000-0000-000000000001",
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "role": "USER",
                "status": "ACTIVE",
            })
        );
    }

    #[test]
    fn test_user_details_includes_null_last_login() {
        let value = serde_json::to_value(UserDetails::from(sample_user())).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["lastLogin"], serde_json::Value::Null);
    }

    #[test]
    fn test_update_profile_requires_a_field() {
        let dto: UpdateProfileRequest = serde_json::from_str("{}").unwrap();
        assert!(dto.validate().is_err());

        let dto: UpdateProfileRequest =
            serde_json::from_str(r#"{"email":"new@example.com"}"#).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_profile_trims_full_name() {
        let dto: UpdateProfileRequest =
            serde_json::from_str(r#"{"fullName":"  Ada King  "}"#).unwrap();
        assert_eq!(dto.full_name.as_deref(), Some("Ada King"));
        assert!(dto.validate().is_ok());

        let blank: UpdateProfileRequest = serde_json::from_str(r#"{"fullName":"   "}"#).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_update_profile_rejects_bad_email() {
        assert!(serde_json::from_str::<UpdateProfileRequest>(r#"{"email":"nope"}"#).is_err());
    }

    #[test]
    fn test_change_password_validation() {
        let valid = ChangePasswordRequest {
            current_password: "oldpassword".to_string(),
            new_password: "newpassword123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short = ChangePasswordRequest {
            current_password: "oldpassword".to_string(),
            new_password: "short".to_string(),
        };
        assert!(short.validate().is_err());

        let short_current = ChangePasswordRequest {
            current_password: "old".to_string(),
            new_password: "newpassword123".to_string(),
        };
        assert!(short_current.validate().is_err());
    }

    #[test]
    fn test_change_password_debug_hides_secrets() {
        let dto = ChangePasswordRequest {
            current_password: "oldpassword".to_string(),
            new_password: "newpassword123".to_string(),
        };
        let debug = format!("{:?}", dto);
        assert!(!debug.contains("oldpassword"));
        assert!(!debug.contains("newpassword123"));
    }
}
