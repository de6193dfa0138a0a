//! Development data seeding.
//!
//! Seeded accounts are ordinary `USER` rows whose emails live under
//! [`SEED_DOMAIN`], which is how [`clear_seed`] finds them again. All of them
//! share one password, [`SEED_PASSWORD`], hashed once at the minimum bcrypt
//! cost.

mod users;

pub use users::{UserSeed, generate_users, inactive_flags};

use anyhow::Context;
use sqlx::PgPool;
use std::time::Instant;
use userhub_core::PasswordHasher;

pub const SEED_DOMAIN: &str = "seed.userhub.local";
pub const SEED_PASSWORD: &str = "password123";

/// Rows per INSERT statement; six bind parameters per row.
const BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    pub users: usize,
    /// Share of accounts created `INACTIVE`, clamped to 0.0..=1.0
    pub inactive_ratio: f64,
}

impl SeedConfig {
    pub fn new(users: usize) -> Self {
        Self {
            users,
            inactive_ratio: 0.0,
        }
    }

    pub fn with_inactive_ratio(mut self, ratio: f64) -> Self {
        self.inactive_ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        self
    }
}

/// Inserts `config.users` fake accounts. Returns the number inserted.
pub async fn seed_users(db: &PgPool, config: &SeedConfig) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("Seeding {} users...", config.users);

    let hasher = PasswordHasher::new(4).map_err(|e| e.error)?;
    let password_hash = hasher.hash(SEED_PASSWORD).await.map_err(|e| e.error)?;

    let users = generate_users(config.users, config.inactive_ratio, &password_hash);

    let mut tx = db.begin().await.context("Failed to start transaction")?;
    let mut inserted = 0;
    for chunk in users.chunks(BATCH_SIZE) {
        inserted += users::insert_chunk(&mut tx, chunk).await?;
    }
    tx.commit().await.context("Failed to commit seed")?;

    println!(
        "   Inserted {} users in {:?} (password: {})",
        inserted,
        start_time.elapsed(),
        SEED_PASSWORD
    );

    Ok(inserted)
}

/// Deletes seeded `USER` accounts. Admins are never touched.
pub async fn clear_seed(db: &PgPool) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("Clearing seeded users...");

    let deleted = sqlx::query("DELETE FROM users WHERE email LIKE $1 AND role = 'USER'")
        .bind(format!("%@{SEED_DOMAIN}"))
        .execute(db)
        .await
        .context("Failed to delete seeded users")?
        .rows_affected();

    println!("   Deleted {} users in {:?}", deleted, start_time.elapsed());

    Ok(deleted)
}
