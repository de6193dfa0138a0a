//! Admin account creation.

use userhub_core::{AppError, PasswordHasher};
use userhub_db::UserStore;
use userhub_models::{Email, NewUser, Role, User, UserStatus};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Creates an `ACTIVE` account with role `ADMIN`.
///
/// Applies the same input rules as signup: a non-blank name, a valid email
/// and a password of at least eight characters. An existing email is a
/// conflict.
pub async fn create_admin(
    store: &dyn UserStore,
    hasher: &PasswordHasher,
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<User, AppError> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err(AppError::validation("Full name is required"));
    }

    let email = Email::new(email.trim()).map_err(|e| AppError::validation(e.to_string()))?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let password_hash = hasher.hash(password).await?;

    store
        .create(NewUser {
            full_name: full_name.to_string(),
            email,
            password_hash,
            role: Role::Admin,
            status: UserStatus::Active,
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use userhub_core::ErrorKind;
    use userhub_db::InMemoryUserStore;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4).unwrap()
    }

    #[tokio::test]
    async fn test_creates_active_admin_with_hashed_password() {
        let store = InMemoryUserStore::new();
        let hasher = hasher();

        let admin = create_admin(&store, &hasher, " Root Admin ", "root@example.com", "supersecret")
            .await
            .unwrap();

        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.status, UserStatus::Active);
        assert_eq!(admin.full_name, "Root Admin");
        assert_ne!(admin.password_hash, "supersecret");
        assert!(hasher.verify("supersecret", &admin.password_hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_rejects_invalid_input() {
        let store = InMemoryUserStore::new();
        let hasher = hasher();

        let blank = create_admin(&store, &hasher, "  ", "root@example.com", "supersecret").await;
        let bad_email = create_admin(&store, &hasher, "Root", "root", "supersecret").await;
        let short = create_admin(&store, &hasher, "Root", "root@example.com", "short").await;

        for result in [blank, bad_email, short] {
            assert_eq!(result.unwrap_err().kind, ErrorKind::Validation);
        }
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = InMemoryUserStore::new();
        let hasher = hasher();

        create_admin(&store, &hasher, "Root", "root@example.com", "supersecret")
            .await
            .unwrap();
        let err = create_admin(&store, &hasher, "Root 2", "root@example.com", "supersecret")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Conflict);
    }
}
