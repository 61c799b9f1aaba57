use chrono::Utc;
use tracing::{error, info};

use crate::domains::inquiries::models::{Inquiry, NewInquiry};
use crate::kernel::BaseInquiryStore;

/// Store a public contact-form submission
///
/// Fields are taken as submitted; status is forced to `new` and the creation
/// time is taken from the server clock.
pub async fn create_inquiry(fields: NewInquiry, store: &dyn BaseInquiryStore) -> bool {
    let inquiry = Inquiry::from_submission(fields, Utc::now());
    let inquiry_id = inquiry.id;
    let role = inquiry.role;

    match store.insert(inquiry).await {
        Ok(()) => {
            info!(inquiry_id = %inquiry_id, role = %role, "Inquiry received");
            true
        }
        Err(e) => {
            error!(error = %e, "Failed to store inquiry");
            false
        }
    }
}
