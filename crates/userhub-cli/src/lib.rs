//! # userhub CLI
//!
//! Administrative helpers used by the `userhub-cli` binary.
//!
//! - [`admin`]: creating `ADMIN` accounts, which no HTTP route can do
//! - [`seeder`]: bulk fake `USER` accounts for development, and their removal
//!
//! ## Usage
//!
//! ```ignore
//! use userhub_cli::seeder::{SeedConfig, seed_users};
//!
//! let inserted = seed_users(&pool, &SeedConfig::new(500).with_inactive_ratio(0.2)).await?;
//! ```

pub mod admin;
pub mod seeder;
