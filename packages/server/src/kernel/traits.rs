// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business rules (defaults, status forcing, signing) live in the domains and
// call through these traits, so tests can swap in the in-memory versions from
// test_dependencies.
//
// Naming convention: Base* for trait names (e.g., BaseContentStore)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::common::{AdminUserId, InquiryId};
use crate::domains::auth::models::AdminUser;
use crate::domains::inquiries::models::{Inquiry, InquiryStatus};
use crate::domains::uploads::{UploadError, UploadFile, UploadedMedia};

// =============================================================================
// Content Store Trait (one JSON document per page section)
// =============================================================================

#[async_trait]
pub trait BaseContentStore: Send + Sync {
    /// Fetch the raw document stored under `key`, if any
    async fn get_document(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Overwrite the document stored under `key`
    async fn put_document(&self, key: &str, document: serde_json::Value) -> Result<()>;
}

// =============================================================================
// Inquiry Store Trait
// =============================================================================

#[async_trait]
pub trait BaseInquiryStore: Send + Sync {
    async fn insert(&self, inquiry: Inquiry) -> Result<()>;

    /// All inquiries ordered by creation time, newest first
    async fn list_newest_first(&self) -> Result<Vec<Inquiry>>;

    /// Returns false when the id does not exist
    async fn update_status(&self, id: InquiryId, status: InquiryStatus) -> Result<bool>;

    /// Returns false when the id does not exist
    async fn delete(&self, id: InquiryId) -> Result<bool>;
}

// =============================================================================
// Admin Credential Store Trait
// =============================================================================

#[async_trait]
pub trait BaseAdminStore: Send + Sync {
    /// Look up by normalized (trimmed, lowercase) email
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>>;

    async fn insert(&self, admin: AdminUser) -> Result<()>;

    async fn record_login(&self, id: AdminUserId, at: DateTime<Utc>) -> Result<()>;
}

// =============================================================================
// Media Host Trait (third-party image hosting)
// =============================================================================

#[async_trait]
pub trait BaseMediaHost: Send + Sync {
    async fn upload_image(&self, file: UploadFile) -> Result<UploadedMedia, UploadError>;

    /// False when uploads are certain to fail for lack of credentials
    fn is_configured(&self) -> bool {
        true
    }
}
