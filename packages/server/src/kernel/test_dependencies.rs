// In-memory implementations of the kernel traits for tests
//
// Each store keeps its state behind Arc<Mutex<..>> so clones share state and a
// test can inspect what the code under test wrote.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseAdminStore, BaseContentStore, BaseInquiryStore, BaseMediaHost};
use crate::common::{AdminUserId, InquiryId};
use crate::domains::auth::models::AdminUser;
use crate::domains::inquiries::models::{Inquiry, InquiryStatus};
use crate::domains::uploads::{UploadError, UploadFile, UploadedMedia};

// =============================================================================
// Content stores
// =============================================================================

#[derive(Clone, Default)]
pub struct InMemoryContentStore {
    documents: Arc<Mutex<HashMap<String, serde_json::Value>>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw document currently stored under `key`
    pub fn stored(&self, key: &str) -> Option<serde_json::Value> {
        self.documents.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl BaseContentStore for InMemoryContentStore {
    async fn get_document(&self, key: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.stored(key))
    }

    async fn put_document(&self, key: &str, document: serde_json::Value) -> Result<()> {
        self.documents
            .lock()
            .unwrap()
            .insert(key.to_string(), document);
        Ok(())
    }
}

/// Store that is never reachable
pub struct FailingContentStore;

#[async_trait]
impl BaseContentStore for FailingContentStore {
    async fn get_document(&self, _key: &str) -> Result<Option<serde_json::Value>> {
        Err(anyhow!("content store unreachable"))
    }

    async fn put_document(&self, _key: &str, _document: serde_json::Value) -> Result<()> {
        Err(anyhow!("content store unreachable"))
    }
}

/// Store that answers only after `delay`
pub struct SlowContentStore {
    delay: Duration,
    inner: InMemoryContentStore,
}

impl SlowContentStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: InMemoryContentStore::new(),
        }
    }
}

#[async_trait]
impl BaseContentStore for SlowContentStore {
    async fn get_document(&self, key: &str) -> Result<Option<serde_json::Value>> {
        tokio::time::sleep(self.delay).await;
        self.inner.get_document(key).await
    }

    async fn put_document(&self, key: &str, document: serde_json::Value) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.put_document(key, document).await
    }
}

// =============================================================================
// Inquiry store
// =============================================================================

#[derive(Clone, Default)]
pub struct InMemoryInquiryStore {
    inquiries: Arc<Mutex<Vec<Inquiry>>>,
    fail_writes: bool,
}

impl InMemoryInquiryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write returns an error
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.inquiries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("inquiry store unreachable"));
        }
        Ok(())
    }
}

#[async_trait]
impl BaseInquiryStore for InMemoryInquiryStore {
    async fn insert(&self, inquiry: Inquiry) -> Result<()> {
        self.check_writable()?;
        self.inquiries.lock().unwrap().push(inquiry);
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<Inquiry>> {
        let mut inquiries = self.inquiries.lock().unwrap().clone();
        inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(inquiries)
    }

    async fn update_status(&self, id: InquiryId, status: InquiryStatus) -> Result<bool> {
        self.check_writable()?;
        let mut inquiries = self.inquiries.lock().unwrap();
        match inquiries.iter_mut().find(|i| i.id == id) {
            Some(inquiry) => {
                inquiry.status = status;
                inquiry.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: InquiryId) -> Result<bool> {
        self.check_writable()?;
        let mut inquiries = self.inquiries.lock().unwrap();
        let before = inquiries.len();
        inquiries.retain(|i| i.id != id);
        Ok(inquiries.len() != before)
    }
}

// =============================================================================
// Admin store
// =============================================================================

#[derive(Clone, Default)]
pub struct InMemoryAdminStore {
    admins: Arc<Mutex<Vec<AdminUser>>>,
}

impl InMemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseAdminStore for InMemoryAdminStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn insert(&self, admin: AdminUser) -> Result<()> {
        let mut admins = self.admins.lock().unwrap();
        if admins.iter().any(|a| a.email == admin.email) {
            return Err(anyhow!("admin with email {} already exists", admin.email));
        }
        admins.push(admin);
        Ok(())
    }

    async fn record_login(&self, id: AdminUserId, at: DateTime<Utc>) -> Result<()> {
        let mut admins = self.admins.lock().unwrap();
        if let Some(admin) = admins.iter_mut().find(|a| a.id == id) {
            admin.last_login_at = Some(at);
        }
        Ok(())
    }
}

// =============================================================================
// Mock media host
// =============================================================================

/// Records every upload and answers with a canned result
#[derive(Clone)]
pub struct MockMediaHost {
    calls: Arc<Mutex<Vec<UploadFile>>>,
    failure: Option<UploadError>,
}

impl MockMediaHost {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Every upload fails with `error`
    pub fn failing(error: UploadError) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: Some(error),
        }
    }

    pub fn calls(&self) -> Vec<UploadFile> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockMediaHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMediaHost for MockMediaHost {
    async fn upload_image(&self, file: UploadFile) -> Result<UploadedMedia, UploadError> {
        let file_name = file.file_name.clone();
        self.calls.lock().unwrap().push(file);

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let public_id = format!("exchange-site/{}", file_name);
        Ok(UploadedMedia {
            url: format!("https://media.test/{}", public_id),
            public_id,
        })
    }
}
