//! Credential issuance for new operators

use anyhow::{bail, Result};
use tracing::info;

use crate::domains::auth::models::{normalize_email, AdminUser};
use crate::domains::auth::password::{hash_password, MIN_PASSWORD_LENGTH};
use crate::kernel::BaseAdminStore;

/// Create an admin user with a hashed password
pub async fn create_admin(
    email: &str,
    password: &str,
    store: &dyn BaseAdminStore,
) -> Result<AdminUser> {
    let email = normalize_email(email);

    if !email.contains('@') {
        bail!("Invalid email address: {}", email);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        bail!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        );
    }
    if store.find_by_email(&email).await?.is_some() {
        bail!("An admin with email {} already exists", email);
    }

    let admin = AdminUser::new(&email, hash_password(password).await?);
    store.insert(admin.clone()).await?;

    info!(admin_id = %admin.id, "Admin user created");
    Ok(admin)
}
