use anyhow::Context;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::{Postgres, Transaction};
use userhub_models::{Role, UserId, UserStatus};

use super::SEED_DOMAIN;

#[derive(Debug, Clone)]
pub struct UserSeed {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub status: UserStatus,
}

/// Spreads `round_down(count * ratio)` inactive flags evenly over `count`
/// positions.
pub fn inactive_flags(count: usize, ratio: f64) -> Vec<bool> {
    let ratio = ratio.clamp(0.0, 1.0);
    (0..count)
        .map(|i| ((i + 1) as f64 * ratio).floor() > (i as f64 * ratio).floor())
        .collect()
}

fn email_part(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Generates fake accounts in parallel.
///
/// Emails carry a per-run tag and the row index, so repeated runs never
/// collide with each other.
pub fn generate_users(count: usize, inactive_ratio: f64, password_hash: &str) -> Vec<UserSeed> {
    let run_tag = UserId::new().into_inner().simple().to_string()[..6].to_string();
    let flags = inactive_flags(count, inactive_ratio);

    flags
        .into_par_iter()
        .enumerate()
        .map(|(idx, inactive)| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            let email = format!(
                "{}.{}.{}{}@{}",
                email_part(&first_name),
                email_part(&last_name),
                run_tag,
                idx,
                SEED_DOMAIN
            );

            UserSeed {
                id: UserId::new(),
                full_name: format!("{first_name} {last_name}"),
                email,
                password_hash: password_hash.to_string(),
                status: if inactive {
                    UserStatus::Inactive
                } else {
                    UserStatus::Active
                },
            }
        })
        .collect()
}

pub(super) async fn insert_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> anyhow::Result<u64> {
    if users.is_empty() {
        return Ok(0);
    }

    let mut query = String::from(
        "INSERT INTO users (id, full_name, email, password_hash, role, status) VALUES ",
    );
    for i in 0..users.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 6;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, ${})",
            p + 1,
            p + 2,
            p + 3,
            p + 4,
            p + 5,
            p + 6
        ));
    }

    let mut q = sqlx::query(&query);
    for user in users {
        q = q
            .bind(user.id)
            .bind(&user.full_name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(Role::User)
            .bind(user.status);
    }

    let result = q
        .execute(&mut **tx)
        .await
        .context("Failed to insert seed users")?;

    Ok(result.rows_affected())
}
