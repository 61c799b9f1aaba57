//! Page content endpoints.
//!
//! Reads are public and always succeed (defaults stand in for anything the
//! store cannot provide). Writes require an admin token.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use super::errors::authorize;
use crate::common::AdminCapability;
use crate::domains::content::{ContentError, SectionKey};
use crate::kernel::ServerDeps;
use crate::server::middleware::AuthUser;

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /api/content
pub async fn get_all_content(Extension(deps): Extension<Arc<ServerDeps>>) -> Json<Value> {
    Json(Value::Object(deps.content().get_all().await))
}

/// GET /api/content/:section
pub async fn get_content_section(
    Extension(deps): Extension<Arc<ServerDeps>>,
    Path(section): Path<String>,
) -> Result<Json<Value>, ContentError> {
    let key: SectionKey = section.parse()?;
    Ok(Json(deps.content().get_document(key).await))
}

/// PUT /api/admin/content/:section
///
/// The body is the complete section document. Responds `{success}`; a store
/// failure is `{success: false}` with a 500 so the panel can offer a retry.
pub async fn put_content_section(
    Extension(deps): Extension<Arc<ServerDeps>>,
    auth_user: Option<Extension<AuthUser>>,
    Path(section): Path<String>,
    Json(document): Json<Value>,
) -> Response {
    if let Err(e) = authorize(auth_user.map(|Extension(u)| u), AdminCapability::EditContent) {
        return e.into_response();
    }

    let key: SectionKey = match section.parse() {
        Ok(key) => key,
        Err(e) => return e.into_response(),
    };

    match deps.content().set_document(key, document).await {
        Ok(true) => Json(SaveResponse {
            success: true,
            error: None,
        })
        .into_response(),
        Ok(false) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SaveResponse {
                success: false,
                error: Some("Failed to save content".to_string()),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(SaveResponse {
                success: false,
                error: Some(e.to_string()),
            }),
        )
            .into_response(),
    }
}
