//! Admin login action

use chrono::{DateTime, Utc};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::common::{AdminUserId, AuthError};
use crate::domains::auth::jwt::JwtService;
use crate::domains::auth::models::normalize_email;
use crate::domains::auth::password::{hash_password, verify_password};
use crate::kernel::BaseAdminStore;

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub admin_id: AdminUserId,
    pub email: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Verify admin credentials and issue a session token.
///
/// Unknown emails and wrong passwords produce the same error.
pub async fn login(
    email: &str,
    password: &str,
    store: &dyn BaseAdminStore,
    jwt_service: &JwtService,
) -> Result<LoginOutcome, AuthError> {
    let email = normalize_email(email);

    let admin = match store.find_by_email(&email).await? {
        Some(admin) => admin,
        None => {
            // Spend the same hashing work as a real check so response time
            // does not reveal which emails exist.
            if let Some(dummy) = dummy_hash().await {
                let _ = verify_password(password, dummy).await;
            }
            warn!("Login attempt for unknown admin email");
            return Err(AuthError::InvalidCredentials);
        }
    };

    if !verify_password(password, &admin.password_hash).await {
        warn!(admin_id = %admin.id, "Login attempt with wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    let issued = jwt_service.create_token(admin.id, admin.email.clone(), true)?;

    if let Err(e) = store.record_login(admin.id, Utc::now()).await {
        // The token is already valid; a missed timestamp is not worth failing the login.
        warn!(admin_id = %admin.id, error = %e, "Failed to record login time");
    }

    info!(admin_id = %admin.id, "Admin logged in");

    Ok(LoginOutcome {
        admin_id: admin.id,
        email: admin.email,
        token: issued.token,
        expires_at: issued.expires_at,
    })
}

async fn dummy_hash() -> Option<&'static str> {
    static DUMMY: OnceCell<Option<String>> = OnceCell::const_new();
    DUMMY
        .get_or_init(|| async { hash_password("timing-equalizer").await.ok() })
        .await
        .as_deref()
}
