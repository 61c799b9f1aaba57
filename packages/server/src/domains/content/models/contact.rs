use serde::{Deserialize, Serialize};

use super::section::{ContentSection, SectionKey};

/// Contact details shown in the footer and contact page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub office_hours: String,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            email: "info@example.com".to_string(),
            phone: "+1 (555) 010-2030".to_string(),
            address: "100 Exchange Place, New York, NY".to_string(),
            office_hours: "Monday to Friday, 9am to 6pm ET".to_string(),
            social: SocialLinks {
                facebook: Some("https://facebook.com/".to_string()),
                instagram: Some("https://instagram.com/".to_string()),
                linkedin: Some("https://linkedin.com/".to_string()),
                twitter: None,
            },
        }
    }
}

impl ContentSection for ContactContent {
    const KEY: SectionKey = SectionKey::Contact;
}
