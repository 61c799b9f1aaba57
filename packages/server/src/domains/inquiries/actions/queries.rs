use anyhow::Result;
use tracing::debug;

use crate::domains::inquiries::models::Inquiry;
use crate::kernel::BaseInquiryStore;

/// All inquiries, newest first
pub async fn list_inquiries(store: &dyn BaseInquiryStore) -> Result<Vec<Inquiry>> {
    let inquiries = store.list_newest_first().await?;
    debug!(count = inquiries.len(), "Listed inquiries");
    Ok(inquiries)
}
