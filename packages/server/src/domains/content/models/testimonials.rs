use serde::{Deserialize, Serialize};

use super::section::{ContentSection, SectionKey};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsContent {
    pub title: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    /// e.g. "Parent", "Professor of Biology"
    pub role: String,
    pub image: Option<String>,
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            title: "What our travelers say".to_string(),
            testimonials: vec![
                Testimonial {
                    quote: "My daughter came home more confident and already planning her next trip."
                        .to_string(),
                    author: "Maria L.".to_string(),
                    role: "Parent".to_string(),
                    image: None,
                },
                Testimonial {
                    quote: "The team handled every detail so I could focus on teaching.".to_string(),
                    author: "Dr. James K.".to_string(),
                    role: "Professor".to_string(),
                    image: None,
                },
            ],
        }
    }
}

impl ContentSection for TestimonialsContent {
    const KEY: SectionKey = SectionKey::Testimonials;
}
