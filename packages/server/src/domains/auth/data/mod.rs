use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use uuid::Uuid;

use crate::domains::auth::actions::LoginOutcome;

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "Bearer token for the admin panel")]
pub struct LoginResult {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub admin: AdminData,
}

/// The signed-in operator
#[derive(Debug, Clone, GraphQLObject)]
pub struct AdminData {
    pub id: Uuid,
    pub email: String,
}

impl From<LoginOutcome> for LoginResult {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            token: outcome.token,
            expires_at: outcome.expires_at,
            admin: AdminData {
                id: outcome.admin_id.into_uuid(),
                email: outcome.email,
            },
        }
    }
}
