//! Uploads domain - image upload proxy to the media host
//!
//! The admin panel posts a file; the server signs the request with the media
//! host's shared secret (never exposed to the browser) and forwards the file.

pub mod errors;
pub mod models;
pub mod signature;

pub use errors::UploadError;
pub use models::{UploadFile, UploadedMedia};
pub use signature::sign_upload;
