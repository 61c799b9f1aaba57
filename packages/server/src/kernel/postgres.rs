//! Postgres-backed implementations of the store traits.
//!
//! Thin adapters: the SQL lives on the models, these just route the trait
//! calls to them.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{BaseAdminStore, BaseContentStore, BaseInquiryStore};
use crate::common::{AdminUserId, InquiryId};
use crate::domains::auth::models::AdminUser;
use crate::domains::content::models::ContentDocument;
use crate::domains::inquiries::models::{Inquiry, InquiryStatus};

pub struct PostgresContentStore {
    pool: PgPool,
}

impl PostgresContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseContentStore for PostgresContentStore {
    async fn get_document(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let document = ContentDocument::find_by_key(key, &self.pool).await?;
        Ok(document.map(|d| d.data))
    }

    async fn put_document(&self, key: &str, document: serde_json::Value) -> Result<()> {
        ContentDocument::upsert(key, &document, &self.pool).await?;
        Ok(())
    }
}

pub struct PostgresInquiryStore {
    pool: PgPool,
}

impl PostgresInquiryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseInquiryStore for PostgresInquiryStore {
    async fn insert(&self, inquiry: Inquiry) -> Result<()> {
        inquiry.insert(&self.pool).await
    }

    async fn list_newest_first(&self) -> Result<Vec<Inquiry>> {
        Inquiry::find_all(&self.pool).await
    }

    async fn update_status(&self, id: InquiryId, status: InquiryStatus) -> Result<bool> {
        Inquiry::update_status(id, status, &self.pool).await
    }

    async fn delete(&self, id: InquiryId) -> Result<bool> {
        Inquiry::delete(id, &self.pool).await
    }
}

pub struct PostgresAdminStore {
    pool: PgPool,
}

impl PostgresAdminStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseAdminStore for PostgresAdminStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>> {
        AdminUser::find_by_email(email, &self.pool).await
    }

    async fn insert(&self, admin: AdminUser) -> Result<()> {
        admin.insert(&self.pool).await
    }

    async fn record_login(&self, id: AdminUserId, at: DateTime<Utc>) -> Result<()> {
        AdminUser::record_login(id, at, &self.pool).await
    }
}
