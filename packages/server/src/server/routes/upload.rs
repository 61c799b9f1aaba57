use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use super::errors::authorize;
use crate::common::AdminCapability;
use crate::domains::uploads::{UploadError, UploadFile};
use crate::kernel::ServerDeps;
use crate::server::middleware::{AuthUser, ClientIp};

/// Multipart field carrying the image
pub const UPLOAD_FIELD: &str = "file";

/// POST /api/admin/upload
///
/// Forwards the `file` field to the media host and answers `{url, publicId}`,
/// or `{error}` with a non-2xx status.
pub async fn upload_handler(
    Extension(deps): Extension<Arc<ServerDeps>>,
    auth_user: Option<Extension<AuthUser>>,
    client_ip: Option<Extension<ClientIp>>,
    multipart: Multipart,
) -> Response {
    let user = match authorize(auth_user.map(|Extension(u)| u), AdminCapability::UploadMedia) {
        Ok(user) => user,
        Err(e) => return e.into_response(),
    };

    let file = match read_upload(multipart, deps.max_upload_bytes).await {
        Ok(file) => file,
        Err(e) => {
            warn!(admin_id = %user.admin_id, error = %e, "Rejected upload request");
            return e.into_response();
        }
    };

    info!(
        admin_id = %user.admin_id,
        client_ip = ?client_ip.map(|Extension(ClientIp(ip))| ip),
        file_name = %file.file_name,
        size = file.bytes.len(),
        "Forwarding upload to media host"
    );

    match deps.media_host.upload_image(file).await {
        Ok(media) => (StatusCode::OK, Json(media)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Pull the image out of the multipart body
async fn read_upload(mut multipart: Multipart, limit: usize) -> Result<UploadFile, UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e.status(), e.body_text(), limit))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = match field.content_type() {
            Some(content_type) if content_type.starts_with("image/") => content_type.to_string(),
            Some(content_type) => {
                return Err(UploadError::BadRequest(format!(
                    "unsupported content type {}",
                    content_type
                )))
            }
            None => {
                return Err(UploadError::BadRequest(
                    "file part has no content type".to_string(),
                ))
            }
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e.status(), e.body_text(), limit))?;

        if bytes.is_empty() {
            return Err(UploadError::EmptyFile);
        }
        if bytes.len() > limit {
            return Err(UploadError::TooLarge { limit });
        }

        return Ok(UploadFile {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(UploadError::MissingFile)
}

fn multipart_error(status: StatusCode, message: String, limit: usize) -> UploadError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge { limit }
    } else {
        UploadError::BadRequest(message)
    }
}
