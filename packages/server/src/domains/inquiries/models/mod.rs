pub mod inquiry;

pub use inquiry::{Inquiry, InquiryRole, InquiryStatus, NewInquiry};
