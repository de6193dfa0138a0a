//! In-memory [`UserStore`] for tests.
//!
//! Records live in a `Vec` in insertion order behind a Tokio `RwLock`.
//! Email uniqueness is enforced under the write lock, so it holds even for
//! concurrent writers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use userhub_core::AppError;
use userhub_models::{Email, NewUser, User, UserId, UserStatus};

use crate::store::{EMAIL_TAKEN, UserStore};

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record, oldest first.
    pub async fn all(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// Overwrites `created_at`, letting tests control list ordering.
    pub async fn set_created_at(&self, id: UserId, at: DateTime<Utc>) {
        if let Some(user) = self.users.write().await.iter_mut().find(|u| u.id == id) {
            user.created_at = at;
        }
    }
}

fn email_in_use(users: &[User], email: &Email, except: Option<UserId>) -> bool {
    users
        .iter()
        .any(|u| u.email == *email && Some(u.id) != except)
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn email_taken(&self, email: &Email, except: Option<UserId>) -> Result<bool, AppError> {
        Ok(email_in_use(&self.users.read().await, email, except))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if email_in_use(&users, &new_user.email, None) {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            full_name: new_user.full_name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            status: new_user.status,
            created_at: now,
            updated_at: now,
            last_login: None,
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn update_profile(
        &self,
        id: UserId,
        full_name: Option<String>,
        email: Option<Email>,
    ) -> Result<Option<User>, AppError> {
        let mut users = self.users.write().await;
        if email
            .as_ref()
            .is_some_and(|email| email_in_use(&users, email, Some(id)))
        {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }

        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(full_name) = full_name {
            user.full_name = full_name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn update_password(&self, id: UserId, password_hash: &str) -> Result<bool, AppError> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(false);
        };
        user.password_hash = password_hash.to_string();
        user.updated_at = Utc::now();

        Ok(true)
    }

    async fn set_status(&self, id: UserId, status: UserStatus) -> Result<Option<User>, AppError> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        user.status = status;
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> Result<(), AppError> {
        if let Some(user) = self.users.write().await.iter_mut().find(|u| u.id == id) {
            user.last_login = Some(at);
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.users.read().await.len() as i64)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, AppError> {
        let mut users = self.users.read().await.clone();
        // Stable sort keeps later inserts first among equal timestamps.
        users.reverse();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(users
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
