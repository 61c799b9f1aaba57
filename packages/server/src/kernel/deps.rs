//! Server dependencies (using traits for testability)
//!
//! Central container handed to every route and GraphQL resolver. All external
//! services sit behind the kernel traits so tests can run fully in memory.

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::domains::auth::JwtService;
use crate::domains::content::{ContentAccessor, DEFAULT_FETCH_TIMEOUT};
use crate::kernel::postgres::{PostgresAdminStore, PostgresContentStore, PostgresInquiryStore};
use crate::kernel::{BaseAdminStore, BaseContentStore, BaseInquiryStore, BaseMediaHost};

/// Default cap on uploaded file size (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct ServerDeps {
    /// Present when backed by Postgres; `None` for in-memory setups
    pub db_pool: Option<PgPool>,
    pub content_store: Arc<dyn BaseContentStore>,
    pub inquiry_store: Arc<dyn BaseInquiryStore>,
    pub admin_store: Arc<dyn BaseAdminStore>,
    pub media_host: Arc<dyn BaseMediaHost>,
    pub jwt_service: Arc<JwtService>,
    pub content_fetch_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl ServerDeps {
    /// Wire every store to the given Postgres pool
    pub fn postgres(
        pool: PgPool,
        media_host: Arc<dyn BaseMediaHost>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            db_pool: Some(pool.clone()),
            content_store: Arc::new(PostgresContentStore::new(pool.clone())),
            inquiry_store: Arc::new(PostgresInquiryStore::new(pool.clone())),
            admin_store: Arc::new(PostgresAdminStore::new(pool)),
            media_host,
            jwt_service,
            content_fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_content_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.content_fetch_timeout = timeout;
        self
    }

    pub fn with_max_upload_bytes(mut self, limit: usize) -> Self {
        self.max_upload_bytes = limit;
        self
    }

    /// Typed accessor over the content store
    pub fn content(&self) -> ContentAccessor {
        ContentAccessor::new(self.content_store.clone(), self.content_fetch_timeout)
    }
}
