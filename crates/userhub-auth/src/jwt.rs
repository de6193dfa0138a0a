//! Issuing and verifying access tokens.
//!
//! Tokens are HS256-signed JWTs over [`Claims`]. Verification checks the
//! signature, the structure of the payload and the `exp` claim with zero
//! leeway. Every failure collapses into the single [`InvalidToken`] error so
//! callers cannot tell an expired token from a forged one.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use userhub_config::JwtConfig;
use userhub_core::AppError;
use userhub_models::{Role, UserId};

use crate::claims::Claims;

/// The token could not be verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidToken;

impl fmt::Display for InvalidToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid or expired token")
    }
}

impl std::error::Error for InvalidToken {}

/// Signs and verifies access tokens with a server-held secret.
///
/// Keys are derived once at construction; the codec is shared through
/// `AppState` behind an `Arc`.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl_secs: config.expires_in_secs,
        }
    }

    /// Issues a token for `user_id` valid for the configured lifetime.
    pub fn issue(&self, user_id: UserId, role: Role) -> Result<String, AppError> {
        self.issue_with_ttl(user_id, role, self.ttl_secs)
    }

    /// Issues a token valid for `ttl_secs` from now. A negative value yields
    /// an already expired token.
    pub fn issue_with_ttl(
        &self,
        user_id: UserId,
        role: Role,
        ttl_secs: i64,
    ) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            user_id,
            role,
            iat: now,
            exp: now.saturating_add(ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(AppError::internal)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, InvalidToken> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| InvalidToken)
    }
}
