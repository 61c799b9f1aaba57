use serde::{Deserialize, Serialize};

use super::section::{ContentSection, SectionKey};

/// About page copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub intro: String,
    pub mission: Statement,
    pub vision: Statement,
    pub image: Option<String>,
}

/// Titled paragraph (mission, vision)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub title: String,
    pub body: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            title: "About us".to_string(),
            intro: "For over a decade we have helped educators turn the world into a classroom."
                .to_string(),
            mission: Statement {
                title: "Our mission".to_string(),
                body: "Make transformative international learning accessible, safe and \
                       academically meaningful."
                    .to_string(),
            },
            vision: Statement {
                title: "Our vision".to_string(),
                body: "A generation of students who see themselves as global citizens.".to_string(),
            },
            image: None,
        }
    }
}

impl ContentSection for AboutContent {
    const KEY: SectionKey = SectionKey::About;
}
