//! User seeding binary
//!
//! Hashes passwords with bcrypt and upserts the accounts, so repeated runs
//! refresh hashes instead of duplicating rows. Reads `SEED_USERS` as
//! comma-separated `username:password` pairs, falling back to the built-in
//! development accounts.

use dotenvy::dotenv;
use log::{info, warn};

use pf_core::domain::entities::user::User;
use pf_core::repositories::UserRepository;
use pf_core::services::auth::hash_password;
use pf_infra::database::{DatabasePool, MySqlUserRepository};
use pf_shared::config::DatabaseConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let users = seed_pairs(std::env::var("SEED_USERS").ok().as_deref());
    if users.is_empty() {
        anyhow::bail!("SEED_USERS contained no usable username:password pairs");
    }

    let pool = DatabasePool::new(DatabaseConfig::from_env()).await?;
    let repository = MySqlUserRepository::new(pool.get_pool().clone());

    for (username, password) in users {
        let hash = hash_password(&password)?;
        repository.upsert(User::new(username.as_str(), hash)).await?;
        info!("Seeded user '{}'", username);
    }

    pool.close().await;
    Ok(())
}

/// Parses comma-separated `username:password` pairs, skipping malformed
/// entries with a warning. `None` yields the development accounts.
fn seed_pairs(raw: Option<&str>) -> Vec<(String, String)> {
    let raw = match raw {
        Some(raw) => raw,
        None => {
            return vec![
                ("admin".to_string(), "passadmin".to_string()),
                ("chef".to_string(), "passchef".to_string()),
            ];
        }
    };

    raw.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .filter_map(|entry| match entry.trim().split_once(':') {
            Some((username, password)) if !username.is_empty() && !password.is_empty() => {
                Some((username.to_string(), password.to_string()))
            }
            _ => {
                warn!("Skipping malformed SEED_USERS entry: '{}'", entry);
                None
            }
        })
        .collect()
}
