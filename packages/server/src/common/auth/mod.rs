//! Authorization checks for the admin panel
//!
//! ```rust
//! use server_core::common::{Actor, AdminCapability, AdminUserId};
//!
//! let admin_id = AdminUserId::new();
//! Actor::new(admin_id, true)
//!     .can(AdminCapability::EditContent)
//!     .check()
//!     .unwrap();
//! ```
//!
//! Handlers call this after authentication has produced an `AuthUser`;
//! the builder keeps the "who may do what" rule in one place.

mod builder;
mod capability;
mod errors;

pub use builder::{Actor, CapabilityBuilder};
pub use capability::AdminCapability;
pub use errors::AuthError;
