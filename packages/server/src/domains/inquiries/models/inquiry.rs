use anyhow::Result;
use chrono::{DateTime, Utc};
use juniper::GraphQLEnum;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use crate::common::InquiryId;

/// Who submitted the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, GraphQLEnum)]
#[serde(rename_all = "snake_case")]
pub enum InquiryRole {
    School,
    Professor,
    Student,
    Parent,
    Institution,
}

impl std::fmt::Display for InquiryRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InquiryRole::School => write!(f, "school"),
            InquiryRole::Professor => write!(f, "professor"),
            InquiryRole::Student => write!(f, "student"),
            InquiryRole::Parent => write!(f, "parent"),
            InquiryRole::Institution => write!(f, "institution"),
        }
    }
}

impl std::str::FromStr for InquiryRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "school" => Ok(InquiryRole::School),
            "professor" => Ok(InquiryRole::Professor),
            "student" => Ok(InquiryRole::Student),
            "parent" => Ok(InquiryRole::Parent),
            "institution" => Ok(InquiryRole::Institution),
            _ => Err(anyhow::anyhow!("Invalid inquiry role: {}", s)),
        }
    }
}

/// Inbox status of an inquiry
///
/// Listed in the usual order of handling, but any status may be set from any
/// other (reopening a closed inquiry is allowed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, GraphQLEnum)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
    Read,
    Replied,
    Closed,
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InquiryStatus::New => write!(f, "new"),
            InquiryStatus::Read => write!(f, "read"),
            InquiryStatus::Replied => write!(f, "replied"),
            InquiryStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "new" => Ok(InquiryStatus::New),
            "read" => Ok(InquiryStatus::Read),
            "replied" => Ok(InquiryStatus::Replied),
            "closed" => Ok(InquiryStatus::Closed),
            _ => Err(anyhow::anyhow!("Invalid inquiry status: {}", s)),
        }
    }
}

/// A stored contact-form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: InquiryId,
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

/// Fields accepted from the public contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: InquiryRole,
    pub institution_name: Option<String>,
    pub message: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for Inquiry {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let role: String = row.try_get("role")?;
        let status: String = row.try_get("status")?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            role: role.parse().map_err(|e: anyhow::Error| sqlx::Error::ColumnDecode {
                index: "role".to_string(),
                source: e.into(),
            })?,
            institution_name: row.try_get("institution_name")?,
            message: row.try_get("message")?,
            status: status.parse().map_err(|e: anyhow::Error| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: e.into(),
            })?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Inquiry {
    /// Build a fresh inquiry from form fields
    ///
    /// Status always starts at `New` and both timestamps are `now`, whatever
    /// the submitter sent.
    pub fn from_submission(fields: NewInquiry, now: DateTime<Utc>) -> Self {
        Self {
            id: InquiryId::new(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            role: fields.role,
            institution_name: fields.institution_name,
            message: fields.message,
            status: InquiryStatus::New,
            created_at: now,
            updated_at: now,
        }
    }

    pub async fn insert(&self, pool: &PgPool) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO inquiries (id, name, email, phone, role, institution_name, message, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.phone)
        .bind(self.role.to_string())
        .bind(&self.institution_name)
        .bind(&self.message)
        .bind(self.status.to_string())
        .bind(self.created_at)
        .bind(self.updated_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// All inquiries, newest first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let inquiries = sqlx::query_as::<_, Self>(
            "SELECT * FROM inquiries ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(inquiries)
    }

    /// Overwrite the status; returns false when no such inquiry exists
    pub async fn update_status(id: InquiryId, status: InquiryStatus, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE inquiries SET status = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status.to_string())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(id: InquiryId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
