//! Request guards.
//!
//! - [`auth`]: [`AuthUser`](auth::AuthUser), the bearer-token extractor
//! - [`role`]: [`check_role`](role::check_role) and role extractors such as
//!   [`RequireAdmin`](role::RequireAdmin)
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//! use crate::middleware::role::RequireAdmin;
//!
//! // Any valid token
//! async fn me(auth_user: AuthUser) -> impl IntoResponse { /* ... */ }
//!
//! // Valid token with role ADMIN
//! async fn list(RequireAdmin(admin): RequireAdmin) -> impl IntoResponse { /* ... */ }
//! ```

pub mod auth;
pub mod role;
