//! # userhub Models
//!
//! Domain models and DTOs for the userhub API.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed UUID newtypes
//! - [`value_types`]: Validated primitives such as [`Email`]
//! - [`users`]: The `User` entity, its enums, and profile/admin DTOs
//! - [`auth`]: Signup and login DTOs
//!
//! # Example
//!
//! ```ignore
//! use userhub_models::{Role, User, UserResponse};
//!
//! fn present(user: &User) -> UserResponse {
//!     UserResponse::from(user)
//! }
//! ```

pub mod auth;
pub mod ids;
pub mod users;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, LoginResponse, SignupRequest};
pub use ids::UserId;
pub use users::{
    ChangePasswordRequest, NewUser, Role, UpdateProfileRequest, User, UserDetails, UserResponse,
    UserStatus, UsersPage,
};
pub use value_types::{Email, ValueTypeError};
