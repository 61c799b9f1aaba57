// HTTP routes
pub mod content;
pub mod errors;
pub mod graphql;
pub mod health;
pub mod upload;

pub use content::*;
pub use errors::*;
pub use graphql::*;
pub use health::*;
pub use upload::*;
