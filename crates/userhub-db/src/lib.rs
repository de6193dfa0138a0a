//! # userhub DB
//!
//! Persistence for user accounts.
//!
//! - [`store`]: the [`UserStore`] trait the rest of the application talks to
//! - [`postgres`]: [`PgUserStore`], the sqlx/PostgreSQL implementation
//! - `memory`: `InMemoryUserStore`, available with the `test-utils` feature
//!
//! Schema lives in the workspace `migrations/` directory and is embedded as
//! [`MIGRATOR`].
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use userhub_config::ServerConfig;
//! use userhub_db::{MIGRATOR, PgUserStore, UserStore, init_db_pool};
//!
//! let pool = init_db_pool(&ServerConfig::from_env()).await?;
//! MIGRATOR.run(&pool).await?;
//! let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool));
//! ```

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use userhub_config::ServerConfig;

#[cfg(feature = "test-utils")]
pub mod memory;
pub mod postgres;
pub mod store;

#[cfg(feature = "test-utils")]
pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;
pub use store::{EMAIL_TAKEN, UserStore};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Connects a PostgreSQL pool sized from `config`.
///
/// Fails if `DATABASE_URL` is unset or the database is unreachable.
pub async fn init_db_pool(config: &ServerConfig) -> anyhow::Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}
