use serde::{Deserialize, Serialize};

use super::section::{ContentSection, SectionKey};

/// Global program cards on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramsContent {
    pub title: String,
    pub subtitle: String,
    pub programs: Vec<ProgramCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramCard {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub link: String,
}

impl Default for ProgramsContent {
    fn default() -> Self {
        Self {
            title: "Global programs".to_string(),
            subtitle: "Short-term and semester options for every stage of learning.".to_string(),
            programs: vec![
                ProgramCard {
                    title: "School group exchanges".to_string(),
                    description: "One- to four-week trips for middle and high school groups."
                        .to_string(),
                    image: None,
                    link: "/programs/schools".to_string(),
                },
                ProgramCard {
                    title: "University study abroad".to_string(),
                    description: "Credit-bearing terms with our partner universities.".to_string(),
                    image: None,
                    link: "/programs/universities".to_string(),
                },
                ProgramCard {
                    title: "Faculty-led programs".to_string(),
                    description: "Professors bring their course abroad; we handle the logistics."
                        .to_string(),
                    image: None,
                    link: "/programs/faculty".to_string(),
                },
            ],
        }
    }
}

impl ContentSection for ProgramsContent {
    const KEY: SectionKey = SectionKey::Programs;
}
