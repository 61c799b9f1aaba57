//! Inquiry domain actions - the inbox operations behind the GraphQL surface
//!
//! Writes report success as a bool and log failures rather than propagating
//! them; the public form and the admin panel both treat a `false` as a
//! retryable, user-visible error.

mod create;
mod queries;
mod update_status;

pub use create::create_inquiry;
pub use queries::list_inquiries;
pub use update_status::{delete_inquiry, set_inquiry_status};
