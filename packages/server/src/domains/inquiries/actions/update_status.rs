use tracing::{error, info, warn};

use crate::common::InquiryId;
use crate::domains::inquiries::models::InquiryStatus;
use crate::kernel::BaseInquiryStore;

/// Overwrite an inquiry's status
///
/// No transition is refused: setting the current status again succeeds, and
/// a closed inquiry can be reopened. Returns false for an unknown id or a
/// store failure.
pub async fn set_inquiry_status(
    id: InquiryId,
    status: InquiryStatus,
    store: &dyn BaseInquiryStore,
) -> bool {
    match store.update_status(id, status).await {
        Ok(true) => {
            info!(inquiry_id = %id, status = %status, "Inquiry status updated");
            true
        }
        Ok(false) => {
            warn!(inquiry_id = %id, "Status update for unknown inquiry");
            false
        }
        Err(e) => {
            error!(inquiry_id = %id, error = %e, "Failed to update inquiry status");
            false
        }
    }
}

pub async fn delete_inquiry(id: InquiryId, store: &dyn BaseInquiryStore) -> bool {
    match store.delete(id).await {
        Ok(true) => {
            info!(inquiry_id = %id, "Inquiry deleted");
            true
        }
        Ok(false) => {
            warn!(inquiry_id = %id, "Delete for unknown inquiry");
            false
        }
        Err(e) => {
            error!(inquiry_id = %id, error = %e, "Failed to delete inquiry");
            false
        }
    }
}
