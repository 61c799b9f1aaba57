use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info, instrument};

use super::BaseMediaHost;
use crate::domains::uploads::{sign_upload, UploadError, UploadFile, UploadedMedia};

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Upper bound on one upload round trip to the media host
pub const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Account credentials for the media host
#[derive(Debug, Clone)]
pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Signed image uploads to Cloudinary
///
/// Built without credentials, every upload fails with `NotConfigured` and no
/// request leaves the process.
pub struct CloudinaryClient {
    client: Client,
    credentials: Option<CloudinaryCredentials>,
    folder: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    public_id: Option<String>,
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl CloudinaryClient {
    pub fn new(credentials: Option<CloudinaryCredentials>, folder: String) -> Result<Self> {
        Self::with_timeout(credentials, folder, DEFAULT_UPLOAD_TIMEOUT)
    }

    pub fn with_timeout(
        credentials: Option<CloudinaryCredentials>,
        folder: String,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            credentials,
            folder,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Point the client at a different API host
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn upload_url(&self, cloud_name: &str) -> String {
        format!("{}/{}/image/upload", self.api_base, cloud_name)
    }

    /// Text fields sent alongside the file
    fn signed_fields(
        &self,
        credentials: &CloudinaryCredentials,
        timestamp: i64,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", credentials.api_key.clone()),
            ("timestamp", timestamp.to_string()),
            ("folder", self.folder.clone()),
            (
                "signature",
                sign_upload(&self.folder, timestamp, &credentials.api_secret),
            ),
            ("signature_algorithm", "sha256".to_string()),
        ]
    }
}

#[async_trait]
impl BaseMediaHost for CloudinaryClient {
    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
    async fn upload_image(&self, file: UploadFile) -> Result<UploadedMedia, UploadError> {
        let credentials = self.credentials.as_ref().ok_or(UploadError::NotConfigured)?;

        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| UploadError::BadRequest(e.to_string()))?;

        let mut form = Form::new().part("file", part);
        for (name, value) in self.signed_fields(credentials, Utc::now().timestamp()) {
            form = form.text(name, value);
        }

        let response = self
            .client
            .post(self.upload_url(&credentials.cloud_name))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Media host unreachable");
                UploadError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body: UploadResponse = response.json().await.map_err(|e| {
            error!(%status, error = %e, "Unreadable media host response");
            UploadError::Transport(e.to_string())
        })?;

        if let Some(err) = body.error {
            error!(%status, message = %err.message, "Media host rejected upload");
            return Err(UploadError::Rejected(err.message));
        }
        if !status.is_success() {
            return Err(UploadError::Rejected(format!("status {}", status)));
        }

        match (body.secure_url, body.public_id) {
            (Some(url), Some(public_id)) => {
                info!(%public_id, "Image uploaded");
                Ok(UploadedMedia { url, public_id })
            }
            _ => Err(UploadError::Rejected(
                "response missing secure_url or public_id".to_string(),
            )),
        }
    }
}
