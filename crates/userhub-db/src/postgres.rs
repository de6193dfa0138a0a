use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use userhub_core::AppError;
use userhub_models::{Email, NewUser, User, UserId, UserStatus};

use crate::store::{EMAIL_TAKEN, UserStore};

const USER_COLUMNS: &str =
    "id, full_name, email, password_hash, role, status, created_at, updated_at, last_login";

/// [`UserStore`] backed by the `users` table.
#[derive(Clone, Debug)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a unique violation to a 409, anything else to an internal error.
fn map_write_error(err: sqlx::Error, context: &'static str) -> AppError {
    let unique_violation = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());

    if unique_violation {
        AppError::conflict(EMAIL_TAKEN)
    } else {
        AppError::database(anyhow::Error::new(err).context(context))
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by id")
        .map_err(AppError::database)?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by email")
        .map_err(AppError::database)?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn email_taken(&self, email: &Email, except: Option<UserId>) -> Result<bool, AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(except)
        .fetch_one(&self.pool)
        .await
        .context("Failed to check email uniqueness")
        .map_err(AppError::database)?;

        Ok(taken)
    }

    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (id, full_name, email, password_hash, role, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(UserId::new())
        .bind(&new_user.full_name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.role)
        .bind(new_user.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to insert user"))
    }

    #[instrument(skip(self))]
    async fn update_profile(
        &self,
        id: UserId,
        full_name: Option<String>,
        email: Option<Email>,
    ) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET full_name = COALESCE($2, full_name),
                 email = COALESCE($3, email)
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(full_name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update user profile"))
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: UserId, password_hash: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .context("Failed to update password")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: UserId, status: UserStatus) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET status = $2 WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update user status")
        .map_err(AppError::database)?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET last_login = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(&self.pool)
            .await
            .context("Failed to record last login")
            .map_err(AppError::database)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count users")
            .map_err(AppError::database)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list users")
        .map_err(AppError::database)?;

        Ok(users)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database ping failed")
            .map_err(AppError::database)?;

        Ok(())
    }
}
