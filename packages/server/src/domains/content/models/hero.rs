use serde::{Deserialize, Serialize};

use super::section::{ContentSection, SectionKey};

/// Home page hero banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub tagline: String,
    pub headline: String,
    pub subheadline: String,
    /// Words cycled by the typing animation after the headline
    pub typing_words: Vec<String>,
    pub primary_cta_text: String,
    pub primary_cta_link: String,
    pub secondary_cta_text: String,
    pub secondary_cta_link: String,
    pub background_image: Option<String>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            tagline: "Learning without borders".to_string(),
            headline: "Educational exchange programs for".to_string(),
            subheadline: "We connect schools, universities and families with immersive \
                          study experiences on five continents."
                .to_string(),
            typing_words: vec![
                "schools".to_string(),
                "students".to_string(),
                "professors".to_string(),
                "institutions".to_string(),
            ],
            primary_cta_text: "Explore programs".to_string(),
            primary_cta_link: "/#programs".to_string(),
            secondary_cta_text: "Talk to an advisor".to_string(),
            secondary_cta_link: "/contact".to_string(),
            background_image: None,
        }
    }
}

impl ContentSection for HeroContent {
    const KEY: SectionKey = SectionKey::Hero;
}
