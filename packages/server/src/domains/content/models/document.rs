use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Stored row for one page section
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContentDocument {
    pub key: String,
    pub data: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl ContentDocument {
    pub async fn find_by_key(key: &str, pool: &PgPool) -> Result<Option<Self>> {
        let document =
            sqlx::query_as::<_, Self>("SELECT key, data, updated_at FROM site_content WHERE key = $1")
                .bind(key)
                .fetch_optional(pool)
                .await?;
        Ok(document)
    }

    /// Overwrite (or create) the document stored under `key`
    pub async fn upsert(key: &str, data: &serde_json::Value, pool: &PgPool) -> Result<Self> {
        let document = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO site_content (key, data, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE
                SET data = EXCLUDED.data,
                    updated_at = NOW()
            RETURNING key, data, updated_at
            "#,
        )
        .bind(key)
        .bind(data)
        .fetch_one(pool)
        .await?;
        Ok(document)
    }
}
