use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::kernel::{CloudinaryCredentials, DEFAULT_MAX_UPLOAD_BYTES};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
    pub content_fetch_timeout: Duration,
    /// `None` unless all three Cloudinary variables are set
    pub cloudinary: Option<CloudinaryCredentials>,
    pub upload_folder: String,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "exchange-cms".to_string()),
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            content_fetch_timeout: Duration::from_millis(
                env::var("CONTENT_FETCH_TIMEOUT_MS")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .context("CONTENT_FETCH_TIMEOUT_MS must be a number of milliseconds")?,
            ),
            cloudinary: cloudinary_from_env(),
            upload_folder: env::var("UPLOAD_FOLDER")
                .unwrap_or_else(|_| "exchange-site".to_string()),
            max_upload_bytes: match env::var("MAX_UPLOAD_BYTES") {
                Ok(value) => value
                    .parse()
                    .context("MAX_UPLOAD_BYTES must be a number of bytes")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

fn cloudinary_from_env() -> Option<CloudinaryCredentials> {
    let non_empty = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

    Some(CloudinaryCredentials {
        cloud_name: non_empty("CLOUDINARY_CLOUD_NAME")?,
        api_key: non_empty("CLOUDINARY_API_KEY")?,
        api_secret: non_empty("CLOUDINARY_API_SECRET")?,
    })
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
