use serde::{Deserialize, Serialize};

use super::section::{ContentSection, SectionKey};

/// "Our approach" section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproachContent {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<ApproachCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproachCard {
    /// Icon name from the site's icon set
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Default for ApproachContent {
    fn default() -> Self {
        Self {
            title: "Our approach".to_string(),
            subtitle: "Every program is built with the partner institution, not for it.".to_string(),
            cards: vec![
                ApproachCard {
                    icon: "compass".to_string(),
                    title: "Tailored itineraries".to_string(),
                    description: "Programs are designed around each group's curriculum and goals."
                        .to_string(),
                },
                ApproachCard {
                    icon: "shield".to_string(),
                    title: "Safety first".to_string(),
                    description: "Vetted housing, 24/7 local staff and clear emergency protocols."
                        .to_string(),
                },
                ApproachCard {
                    icon: "users".to_string(),
                    title: "Real connections".to_string(),
                    description: "Homestays and partner classrooms put students alongside locals."
                        .to_string(),
                },
            ],
        }
    }
}

impl ContentSection for ApproachContent {
    const KEY: SectionKey = SectionKey::Approach;
}
