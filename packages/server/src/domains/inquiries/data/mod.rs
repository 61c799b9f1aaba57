use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::domains::inquiries::models::{Inquiry, InquiryRole, InquiryStatus, NewInquiry};

/// Inquiry GraphQL data type
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A contact-form submission in the admin inbox")]
pub struct InquiryData {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: InquiryRole,
    pub institution_name: Option<String>,
    pub message: Option<String>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public contact form fields
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct SubmitInquiryInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: InquiryRole,
    pub institution_name: Option<String>,
    pub message: Option<String>,
}

impl From<Inquiry> for InquiryData {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id.into_uuid(),
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            role: inquiry.role,
            institution_name: inquiry.institution_name,
            message: inquiry.message,
            status: inquiry.status,
            created_at: inquiry.created_at,
            updated_at: inquiry.updated_at,
        }
    }
}

impl From<SubmitInquiryInput> for NewInquiry {
    fn from(input: SubmitInquiryInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            phone: input.phone,
            role: input.role,
            institution_name: input.institution_name,
            message: input.message,
        }
    }
}
