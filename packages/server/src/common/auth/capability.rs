/// Operations exposed by the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCapability {
    /// Overwrite page section documents
    EditContent,

    /// Read the inquiry inbox and change inquiry status
    ManageInquiries,

    /// Push images to the media host
    UploadMedia,
}

impl AdminCapability {
    /// Check if this capability requires admin access
    pub fn requires_admin(&self) -> bool {
        // Public reads and inquiry submission never go through a capability
        true
    }
}

impl std::fmt::Display for AdminCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminCapability::EditContent => write!(f, "edit_content"),
            AdminCapability::ManageInquiries => write!(f, "manage_inquiries"),
            AdminCapability::UploadMedia => write!(f, "upload_media"),
        }
    }
}
