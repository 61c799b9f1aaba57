//! Read/write access to page section documents.
//!
//! Reads never fail: a store error, a missing document, a document of the wrong
//! shape, or a store that does not answer within the fetch timeout all yield
//! the section's default. Writes report success as a bool and never propagate
//! errors; the admin panel shows a retryable error indicator instead.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::errors::ContentError;
use super::merge::merge_over_default;
use super::models::{ContentSection, SectionKey};
use crate::kernel::BaseContentStore;

/// Fetch timeout used when none is configured
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct ContentAccessor {
    store: Arc<dyn BaseContentStore>,
    fetch_timeout: Duration,
}

impl ContentAccessor {
    pub fn new(store: Arc<dyn BaseContentStore>, fetch_timeout: Duration) -> Self {
        Self {
            store,
            fetch_timeout,
        }
    }

    /// Fetch a typed section, merged over its default
    pub async fn get<T: ContentSection>(&self) -> T {
        let key = T::KEY;
        let document = self.get_document(key).await;
        match serde_json::from_value(document) {
            Ok(section) => section,
            Err(e) => {
                warn!(section = %key, error = %e, "Merged document did not decode, using default");
                T::default()
            }
        }
    }

    /// Overwrite a typed section
    pub async fn set<T: ContentSection>(&self, value: &T) -> bool {
        let key = T::KEY;
        match serde_json::to_value(value) {
            Ok(document) => self.put_document(key, document).await,
            Err(e) => {
                error!(section = %key, error = %e, "Failed to serialize section");
                false
            }
        }
    }

    /// Fetch a section as JSON, merged over its default
    ///
    /// The fetch is abandoned, not cancelled at the store, once the timeout
    /// elapses.
    pub async fn get_document(&self, key: SectionKey) -> Value {
        let default = key.default_document();

        match tokio::time::timeout(self.fetch_timeout, self.store.get_document(key.as_str())).await
        {
            Ok(Ok(Some(stored))) => {
                let merged = merge_over_default(default.clone(), stored);
                match key.normalize(merged) {
                    Ok(document) => document,
                    Err(e) => {
                        warn!(section = %key, error = %e, "Stored document is malformed, using default");
                        default
                    }
                }
            }
            Ok(Ok(None)) => {
                debug!(section = %key, "No stored document, using default");
                default
            }
            Ok(Err(e)) => {
                warn!(section = %key, error = %e, "Content fetch failed, using default");
                default
            }
            Err(_) => {
                warn!(
                    section = %key,
                    timeout_ms = self.fetch_timeout.as_millis() as u64,
                    "Content fetch timed out, using default"
                );
                default
            }
        }
    }

    /// Validate and overwrite a section from untyped JSON
    ///
    /// Shape errors are returned so the caller can reject the request; store
    /// failures are reported as `Ok(false)`.
    pub async fn set_document(&self, key: SectionKey, document: Value) -> Result<bool, ContentError> {
        let document = key.normalize(document)?;
        Ok(self.put_document(key, document).await)
    }

    /// Every section, merged over defaults, keyed by storage key
    ///
    /// Sections are fetched concurrently, so a stalled store costs one
    /// fetch timeout in total.
    pub async fn get_all(&self) -> serde_json::Map<String, Value> {
        let documents = join_all(SectionKey::ALL.iter().map(|&key| self.get_document(key))).await;

        SectionKey::ALL
            .iter()
            .zip(documents)
            .map(|(key, document)| (key.as_str().to_string(), document))
            .collect()
    }

    async fn put_document(&self, key: SectionKey, document: Value) -> bool {
        match self.store.put_document(key.as_str(), document).await {
            Ok(()) => {
                info!(section = %key, "Content section saved");
                true
            }
            Err(e) => {
                error!(section = %key, error = %e, "Failed to save content section");
                false
            }
        }
    }
}
