use super::{AdminCapability, AuthError};
use crate::common::entity_ids::AdminUserId;
use tracing::warn;

/// Entry point for authorization checks
pub struct Actor {
    actor_id: AdminUserId,
    is_admin: bool,
}

impl Actor {
    /// `is_admin` comes from a verified JWT, so it is trusted as-is.
    pub fn new(actor_id: AdminUserId, is_admin: bool) -> Self {
        Self { actor_id, is_admin }
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: AdminCapability) -> CapabilityBuilder {
        CapabilityBuilder {
            actor_id: self.actor_id,
            is_admin: self.is_admin,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder {
    actor_id: AdminUserId,
    is_admin: bool,
    capability: AdminCapability,
}

impl CapabilityBuilder {
    /// Perform the authorization check
    pub fn check(self) -> Result<(), AuthError> {
        if self.capability.requires_admin() && !self.is_admin {
            warn!(
                actor_id = %self.actor_id,
                capability = %self.capability,
                "Rejected non-admin actor"
            );
            return Err(AuthError::AdminRequired);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_check() {
        let result = Actor::new(AdminUserId::new(), true)
            .can(AdminCapability::EditContent)
            .check();

        assert!(result.is_ok());
    }

    #[test]
    fn test_non_admin_rejected() {
        let result = Actor::new(AdminUserId::new(), false)
            .can(AdminCapability::ManageInquiries)
            .check();

        assert!(matches!(result, Err(AuthError::AdminRequired)));
    }
}
