use thiserror::Error;

/// Upload proxy failures, each surfaced to the operator as `{error}`
#[derive(Error, Debug, Clone)]
pub enum UploadError {
    #[error("Upload service is not configured")]
    NotConfigured,

    #[error("No file provided")]
    MissingFile,

    #[error("Uploaded file is empty")]
    EmptyFile,

    #[error("File exceeds the {limit} byte upload limit")]
    TooLarge { limit: usize },

    #[error("Invalid upload request: {0}")]
    BadRequest(String),

    #[error("Media host rejected the upload: {0}")]
    Rejected(String),

    #[error("Media host request failed: {0}")]
    Transport(String),
}
