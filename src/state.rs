use std::fmt;
use std::sync::Arc;

use anyhow::Context;
use userhub_auth::TokenCodec;
use userhub_config::{CorsConfig, JwtConfig, PasswordConfig, ServerConfig};
use userhub_core::PasswordHasher;
use userhub_db::{MIGRATOR, PgUserStore, UserStore, init_db_pool};

/// Everything a handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub tokens: Arc<TokenCodec>,
    pub hasher: PasswordHasher,
    pub cors_config: CorsConfig,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("hasher", &self.hasher)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        jwt_config: &JwtConfig,
        hasher: PasswordHasher,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            store,
            tokens: Arc::new(TokenCodec::new(jwt_config)),
            hasher,
            cors_config,
        }
    }
}

/// Connects to PostgreSQL, applies pending migrations and assembles the
/// state from the environment.
pub async fn init_app_state(server_config: &ServerConfig) -> anyhow::Result<AppState> {
    let pool = init_db_pool(server_config).await?;
    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let password_config = PasswordConfig::from_env();
    let hasher = PasswordHasher::new(password_config.bcrypt_cost).map_err(|e| e.error)?;

    Ok(AppState::new(
        Arc::new(PgUserStore::new(pool)),
        &JwtConfig::from_env(),
        hasher,
        CorsConfig::from_env(),
    ))
}
