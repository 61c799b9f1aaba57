//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::{error, info};
use uuid::Uuid;

use crate::common::{AdminCapability, AuthError, InquiryId};

// Domain actions
use crate::domains::auth::actions as auth_actions;
use crate::domains::inquiries::actions as inquiry_actions;

// Domain data types (GraphQL types)
use crate::domains::auth::data::{AdminData, LoginResult};
use crate::domains::globe::data::{GlobeArcData, LocationData, ProgramData};
use crate::domains::inquiries::data::{InquiryData, SubmitInquiryInput};
use crate::domains::inquiries::InquiryStatus;

// Globe
use crate::domains::globe::{self, GlobeResolver, Vec3};

fn field_error(message: impl Into<String>) -> FieldError {
    FieldError::new(message.into(), juniper::Value::null())
}

/// A program together with the destination that offers it
#[derive(Debug, Clone, juniper::GraphQLObject)]
pub struct ProgramMatchData {
    pub location: LocationData,
    pub program: ProgramData,
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Globe Queries (public)
    // =========================================================================

    /// Every exchange destination, in display order
    fn locations() -> Vec<LocationData> {
        globe::locations().iter().map(LocationData::from).collect()
    }

    /// A single destination by id
    fn location(id: String) -> Option<LocationData> {
        globe::find_location(&id).map(LocationData::from)
    }

    /// Look up a program by slug (program detail pages)
    fn program(slug: String) -> Option<ProgramMatchData> {
        globe::find_program(&slug).map(|(location, program)| ProgramMatchData {
            location: LocationData::from(location),
            program: ProgramData::from(program),
        })
    }

    /// Decorative arcs from the home office to every destination
    fn globe_arcs() -> Vec<GlobeArcData> {
        globe::build_arcs(globe::HUB, globe::locations())
            .into_iter()
            .map(GlobeArcData::from)
            .collect()
    }

    /// Map a pointer/sphere intersection point to a destination
    ///
    /// Returns null when the point is not near any destination marker.
    fn resolve_globe_point(x: f64, y: f64, z: f64) -> Option<LocationData> {
        GlobeResolver::default()
            .resolve(Vec3::new(x, y, z), globe::locations())
            .map(LocationData::from)
    }

    // =========================================================================
    // Inquiry Queries (admin only)
    // =========================================================================

    /// Contact-form inbox, newest first
    async fn inquiries(ctx: &GraphQLContext) -> FieldResult<Vec<InquiryData>> {
        ctx.require_capability(AdminCapability::ManageInquiries)?;

        let inquiries = inquiry_actions::list_inquiries(ctx.deps.inquiry_store.as_ref())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list inquiries");
                field_error("Failed to load inquiries")
            })?;

        Ok(inquiries.into_iter().map(InquiryData::from).collect())
    }

    // =========================================================================
    // Auth Queries
    // =========================================================================

    /// The admin behind the current bearer token
    fn me(ctx: &GraphQLContext) -> FieldResult<AdminData> {
        let user = ctx.require_auth()?;
        Ok(AdminData {
            id: user.admin_id.into_uuid(),
            email: user.email.clone(),
        })
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Auth Mutations
    // =========================================================================

    /// Exchange admin credentials for a bearer token
    async fn login(ctx: &GraphQLContext, email: String, password: String) -> FieldResult<LoginResult> {
        let outcome = auth_actions::login(
            &email,
            &password,
            ctx.deps.admin_store.as_ref(),
            &ctx.deps.jwt_service,
        )
        .await
        .map_err(|e| match e {
            AuthError::InternalError(inner) => {
                error!(error = %inner, "Login failed unexpectedly");
                field_error("Login is temporarily unavailable")
            }
            other => field_error(other.to_string()),
        })?;

        Ok(LoginResult::from(outcome))
    }

    // =========================================================================
    // Inquiry Mutations
    // =========================================================================

    /// Public contact form submission
    ///
    /// Returns false when the inquiry could not be stored.
    async fn submit_inquiry(ctx: &GraphQLContext, input: SubmitInquiryInput) -> bool {
        info!(role = %input.role, "Contact form submitted");
        inquiry_actions::create_inquiry(input.into(), ctx.deps.inquiry_store.as_ref()).await
    }

    /// Overwrite an inquiry's status (admin only)
    async fn update_inquiry_status(
        ctx: &GraphQLContext,
        id: Uuid,
        status: InquiryStatus,
    ) -> FieldResult<bool> {
        ctx.require_capability(AdminCapability::ManageInquiries)?;

        Ok(inquiry_actions::set_inquiry_status(
            InquiryId::from_uuid(id),
            status,
            ctx.deps.inquiry_store.as_ref(),
        )
        .await)
    }

    /// Remove an inquiry from the inbox (admin only)
    async fn delete_inquiry(ctx: &GraphQLContext, id: Uuid) -> FieldResult<bool> {
        ctx.require_capability(AdminCapability::ManageInquiries)?;

        Ok(
            inquiry_actions::delete_inquiry(InquiryId::from_uuid(id), ctx.deps.inquiry_store.as_ref())
                .await,
        )
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
