//! Inquiries domain - the contact-form inbox
//!
//! Public visitors append inquiries; operators list them and move them
//! through new → read → replied → closed (or back).

pub mod actions;
pub mod data;
pub mod models;

pub use models::{Inquiry, InquiryRole, InquiryStatus, NewInquiry};
