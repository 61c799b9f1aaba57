//! Auth domain - admin panel credentials and session tokens
//!
//! Responsibilities:
//! - Argon2 password hashes for operators (issued by the `create_admin` CLI)
//! - Email/password login that issues a signed, expiring JWT
//! - Token verification for the HTTP middleware

pub mod actions;
pub mod data;
pub mod jwt;
pub mod models;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtService};
pub use models::AdminUser;
