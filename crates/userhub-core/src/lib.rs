//! # userhub Core
//!
//! Core types, errors, and utilities for the userhub API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: The tagged [`AppError`] and its HTTP response conversion
//! - [`response`]: The uniform `{success, data, message, errors}` envelope
//! - [`pagination`]: Page/limit query parameters and response metadata
//! - [`password`]: bcrypt hashing and verification off the async reactor
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use userhub_core::{ApiResponse, AppError, PasswordHasher};
//!
//! let hasher = PasswordHasher::new(bcrypt::DEFAULT_COST)?;
//! let hash = hasher.hash("correct horse battery staple").await?;
//!
//! if !hasher.verify("wrong", &hash).await? {
//!     return Err(AppError::unauthorized("Invalid credentials"));
//! }
//! ```

pub mod errors;
pub mod pagination;
pub mod password;
pub mod response;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};
pub use pagination::{PaginationMeta, PaginationParams};
pub use password::PasswordHasher;
pub use response::ApiResponse;
