//! Content domain - editable page sections for the public site
//!
//! Seven independently shaped section documents (hero, approach, programs,
//! testimonials, about, contact, where-can-you-go), each with a compiled-in
//! default that backs every read.

pub mod accessor;
pub mod errors;
pub mod merge;
pub mod models;

pub use accessor::{ContentAccessor, DEFAULT_FETCH_TIMEOUT};
pub use errors::ContentError;
pub use models::{ContentSection, SectionKey};
