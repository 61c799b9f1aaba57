//! Typed ID definitions for persisted entities.

pub use super::id::Id;

/// Marker type for contact-form inquiries.
pub struct Inquiry;

/// Marker type for admin panel operators.
pub struct AdminUser;

/// Typed ID for Inquiry records.
pub type InquiryId = Id<Inquiry>;

/// Typed ID for AdminUser records.
pub type AdminUserId = Id<AdminUser>;
