// Exchange Programs CMS - API Core
//
// Backend for the marketing site and its admin panel: editable page content,
// contact-form inquiries, signed image uploads, and the destination globe.
//
// Domains live in domains/*, infrastructure behind kernel traits.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
