//! The credential store abstraction.
//!
//! Handlers and services only ever see `Arc<dyn UserStore>`. Production uses
//! [`PgUserStore`](crate::PgUserStore); tests can swap in
//! [`InMemoryUserStore`](crate::InMemoryUserStore) behind the `test-utils`
//! feature.
//!
//! Every implementation must uphold email uniqueness itself: a write that
//! would give two accounts the same email fails with a `Conflict`
//! [`AppError`] carrying [`EMAIL_TAKEN`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use userhub_core::AppError;
use userhub_models::{Email, NewUser, User, UserId, UserStatus};

/// Message of the conflict raised on a duplicate email.
pub const EMAIL_TAKEN: &str = "Email already exists";

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError>;

    /// Whether any account other than `except` uses `email`.
    async fn email_taken(&self, email: &Email, except: Option<UserId>) -> Result<bool, AppError>;

    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Applies the fields that are `Some`. Returns `None` if the user does
    /// not exist.
    async fn update_profile(
        &self,
        id: UserId,
        full_name: Option<String>,
        email: Option<Email>,
    ) -> Result<Option<User>, AppError>;

    /// Returns `false` if the user does not exist.
    async fn update_password(&self, id: UserId, password_hash: &str) -> Result<bool, AppError>;

    async fn set_status(&self, id: UserId, status: UserStatus) -> Result<Option<User>, AppError>;

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> Result<(), AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Newest accounts first.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, AppError>;

    /// Cheap connectivity check for the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
