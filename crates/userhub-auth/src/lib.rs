//! # userhub Auth
//!
//! Bearer-token support for the userhub API.
//!
//! - [`claims`]: the signed payload, `{userId, role, iat, exp}`
//! - [`jwt`]: [`TokenCodec`], which issues and verifies HS256 tokens
//!
//! Tokens are stateless. There is no revocation list, so a token stays
//! valid until its `exp` even if the account is later deactivated.
//!
//! # Example
//!
//! ```ignore
//! use userhub_auth::TokenCodec;
//! use userhub_config::JwtConfig;
//!
//! let codec = TokenCodec::new(&JwtConfig::from_env());
//! let token = codec.issue(user.id, user.role)?;
//!
//! let claims = codec.verify(&token)?;
//! assert_eq!(claims.user_id, user.id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{InvalidToken, TokenCodec};
