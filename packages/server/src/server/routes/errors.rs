//! JSON error bodies for the REST routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::common::{Actor, AdminCapability, AuthError};
use crate::domains::content::ContentError;
use crate::domains::uploads::UploadError;
use crate::server::middleware::AuthUser;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Require a signed-in admin holding `capability`
pub fn authorize(
    auth_user: Option<AuthUser>,
    capability: AdminCapability,
) -> Result<AuthUser, AuthError> {
    let user = auth_user.ok_or(AuthError::AuthenticationRequired)?;
    Actor::new(user.admin_id, user.is_admin)
        .can(capability)
        .check()?;
    Ok(user)
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::AuthenticationRequired
            | AuthError::InvalidCredentials
            | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::AdminRequired => StatusCode::FORBIDDEN,
            AuthError::InternalError(e) => {
                error!(error = %e, "Internal auth error");
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal error");
            }
        };
        error_response(status, self.to_string())
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        let status = match &self {
            ContentError::UnknownSection(_) => StatusCode::NOT_FOUND,
            ContentError::InvalidDocument { .. } => StatusCode::BAD_REQUEST,
        };
        error_response(status, self.to_string())
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match &self {
            UploadError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            UploadError::MissingFile | UploadError::EmptyFile | UploadError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Rejected(_) | UploadError::Transport(_) => StatusCode::BAD_GATEWAY,
        };
        error_response(status, self.to_string())
    }
}
