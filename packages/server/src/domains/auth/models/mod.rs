pub mod admin_user;

pub use admin_user::{normalize_email, AdminUser};
