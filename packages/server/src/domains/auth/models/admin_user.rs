use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::AdminUserId;

/// An operator allowed into the admin panel
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Emails are compared case-insensitively and without surrounding whitespace
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AdminUser {
    pub fn new(email: &str, password_hash: String) -> Self {
        Self {
            id: AdminUserId::new(),
            email: normalize_email(email),
            password_hash,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        let admin = sqlx::query_as::<_, Self>("SELECT * FROM admin_users WHERE email = $1")
            .bind(normalize_email(email))
            .fetch_optional(pool)
            .await?;
        Ok(admin)
    }

    pub async fn insert(&self, pool: &PgPool) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_users (id, email, password_hash, created_at, last_login_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(self.id)
        .bind(&self.email)
        .bind(&self.password_hash)
        .bind(self.created_at)
        .bind(self.last_login_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn record_login(id: AdminUserId, at: DateTime<Utc>, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE admin_users SET last_login_at = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(pool)
            .await?;
        Ok(())
    }
}
