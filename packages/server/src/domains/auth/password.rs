//! Password hashing for admin credentials (Argon2id, PHC string format).
//!
//! Hashing and verification run on tokio's blocking pool.

use anyhow::{anyhow, Context, Result};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use tracing::error;

/// Shortest password `create_admin` will accept
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Hash a password with a fresh random salt
pub async fn hash_password(password: &str) -> Result<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .context("Password hashing task failed")?
}

/// Check a password against a stored PHC hash
///
/// A malformed stored hash never verifies.
pub async fn verify_password(password: &str, password_hash: &str) -> bool {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    match tokio::task::spawn_blocking(move || verify_blocking(&password, &password_hash)).await {
        Ok(verified) => verified,
        Err(e) => {
            error!(error = %e, "Password verification task failed");
            false
        }
    }
}

fn hash_blocking(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow!("Failed to hash password: {}", e))
}

fn verify_blocking(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
