//! bcrypt password hashing.
//!
//! bcrypt is deliberately slow, so both hashing and verification run on the
//! blocking thread pool via [`tokio::task::spawn_blocking`] rather than on
//! the async reactor.

use std::sync::Arc;

use anyhow::Context;

use crate::errors::AppError;

const DUMMY_PASSWORD: &str = "userhub-dummy-password-for-timing";

/// Hashes and verifies passwords with a fixed bcrypt cost.
///
/// Cloning is cheap; the precomputed dummy hash is shared.
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<str>,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}

impl PasswordHasher {
    /// Builds a hasher for the given cost (4..=31).
    ///
    /// Fails if bcrypt rejects the cost.
    pub fn new(cost: u32) -> Result<Self, AppError> {
        let dummy_hash =
            bcrypt::hash(DUMMY_PASSWORD, cost).context("Failed to initialise password hasher")?;

        Ok(Self {
            cost,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    pub async fn hash(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let cost = self.cost;

        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .context("Password hashing task failed")?
            .context("Failed to hash password")?;

        Ok(hashed)
    }

    /// Returns `Ok(false)` on mismatch; a malformed stored hash is an error.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .context("Password verification task failed")?
            .context("Failed to verify password")?;

        Ok(matches)
    }

    /// Spends the same work as a real verification against a hash that never
    /// matches. Used when the account does not exist.
    pub async fn verify_dummy(&self, password: &str) {
        let hash = Arc::clone(&self.dummy_hash);
        let password = password.to_owned();

        let _ = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4).unwrap()
    }

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = hasher();
        let hash = hasher.hash("correct horse").await.unwrap();

        assert_ne!(hash, "correct horse");
        assert!(hasher.verify("correct horse", &hash).await.unwrap());
        assert!(!hasher.verify("wrong horse", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = hasher();
        let first = hasher.hash("password123").await.unwrap();
        let second = hasher.hash("password123").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_internal_error() {
        let err = hasher().verify("password123", "not-a-hash").await.unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::Internal);
    }

    #[tokio::test]
    async fn test_verify_dummy_completes() {
        hasher().verify_dummy("anything at all").await;
    }

    #[test]
    fn test_invalid_cost_rejected() {
        assert!(PasswordHasher::new(2).is_err());
    }

    #[test]
    fn test_debug_hides_dummy_hash() {
        let debug = format!("{:?}", hasher());
        assert!(debug.contains("cost: 4"));
        assert!(!debug.contains("$2"));
    }
}
