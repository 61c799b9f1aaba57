//! Kernel module - server infrastructure and dependencies.

pub mod cloudinary_client;
pub mod deps;
pub mod postgres;
pub mod test_dependencies;
pub mod traits;

pub use cloudinary_client::{CloudinaryClient, CloudinaryCredentials};
pub use deps::{ServerDeps, DEFAULT_MAX_UPLOAD_BYTES};
pub use traits::*;
