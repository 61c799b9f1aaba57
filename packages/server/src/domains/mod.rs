// Business domains
pub mod auth;
pub mod content;
pub mod globe;
pub mod inquiries;
pub mod uploads;
