use thiserror::Error;

use super::models::SectionKey;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Unknown content section: {0}")]
    UnknownSection(String),

    #[error("Invalid {section} document: {reason}")]
    InvalidDocument { section: SectionKey, reason: String },
}
