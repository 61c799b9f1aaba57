use std::sync::Arc;

use juniper::FieldError;

use crate::common::{Actor, AdminCapability};
use crate::kernel::ServerDeps;
use crate::server::middleware::AuthUser;

/// GraphQL request context
///
/// Shared dependencies plus the caller's verified identity, if any. Built per
/// request from the JWT middleware's output.
#[derive(Clone)]
pub struct GraphQLContext {
    pub deps: Arc<ServerDeps>,
    pub auth_user: Option<AuthUser>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: Arc<ServerDeps>, auth_user: Option<AuthUser>) -> Self {
        Self { deps, auth_user }
    }

    /// The signed-in admin, or an error for anonymous callers
    pub fn require_auth(&self) -> Result<&AuthUser, FieldError> {
        self.auth_user
            .as_ref()
            .ok_or_else(|| FieldError::new("Authentication required", juniper::Value::null()))
    }

    /// Check that the caller holds `capability`
    pub fn require_capability(&self, capability: AdminCapability) -> Result<&AuthUser, FieldError> {
        let user = self.require_auth()?;
        Actor::new(user.admin_id, user.is_admin)
            .can(capability)
            .check()
            .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;
        Ok(user)
    }
}
