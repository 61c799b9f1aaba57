// Common test utilities

pub mod graphql;
pub mod harness;
pub mod http;

pub use graphql::*;
pub use harness::*;
pub use http::*;
