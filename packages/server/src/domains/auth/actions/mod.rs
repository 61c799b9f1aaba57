//! Auth domain actions

mod create_admin;
mod login;

pub use create_admin::create_admin;
pub use login::{login, LoginOutcome};
