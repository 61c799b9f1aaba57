use serde::{Deserialize, Serialize};

use super::section::{ContentSection, SectionKey};

/// Copy framing the interactive globe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhereCanYouGoContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_text: String,
}

impl Default for WhereCanYouGoContent {
    fn default() -> Self {
        Self {
            title: "Where can you go?".to_string(),
            subtitle: "Spin the globe to explore our destinations.".to_string(),
            description: "Hover over a city to preview its programs, or click to see the full \
                          itinerary."
                .to_string(),
            cta_text: "See all destinations".to_string(),
        }
    }
}

impl ContentSection for WhereCanYouGoContent {
    const KEY: SectionKey = SectionKey::WhereCanYouGo;
}
