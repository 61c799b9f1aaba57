use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    AboutContent, ApproachContent, ContactContent, HeroContent, ProgramsContent,
    TestimonialsContent, WhereCanYouGoContent,
};
use crate::domains::content::errors::ContentError;

/// Fixed identifier of each editable page section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Hero,
    Approach,
    Programs,
    Testimonials,
    About,
    Contact,
    WhereCanYouGo,
}

/// A typed section document with a compiled-in default
pub trait ContentSection:
    Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static
{
    const KEY: SectionKey;
}

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Hero,
        SectionKey::Approach,
        SectionKey::Programs,
        SectionKey::Testimonials,
        SectionKey::About,
        SectionKey::Contact,
        SectionKey::WhereCanYouGo,
    ];

    /// Storage key (`site_content.key`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::Approach => "approach",
            SectionKey::Programs => "programs",
            SectionKey::Testimonials => "testimonials",
            SectionKey::About => "about",
            SectionKey::Contact => "contact",
            SectionKey::WhereCanYouGo => "where_can_you_go",
        }
    }

    /// The section's default document as JSON
    pub fn default_document(&self) -> Value {
        match self {
            SectionKey::Hero => default_json::<HeroContent>(),
            SectionKey::Approach => default_json::<ApproachContent>(),
            SectionKey::Programs => default_json::<ProgramsContent>(),
            SectionKey::Testimonials => default_json::<TestimonialsContent>(),
            SectionKey::About => default_json::<AboutContent>(),
            SectionKey::Contact => default_json::<ContactContent>(),
            SectionKey::WhereCanYouGo => default_json::<WhereCanYouGoContent>(),
        }
    }

    /// Check that `document` has this section's shape and return it in
    /// canonical form (unknown fields dropped).
    pub fn normalize(&self, document: Value) -> Result<Value, ContentError> {
        match self {
            SectionKey::Hero => normalize_as::<HeroContent>(document),
            SectionKey::Approach => normalize_as::<ApproachContent>(document),
            SectionKey::Programs => normalize_as::<ProgramsContent>(document),
            SectionKey::Testimonials => normalize_as::<TestimonialsContent>(document),
            SectionKey::About => normalize_as::<AboutContent>(document),
            SectionKey::Contact => normalize_as::<ContactContent>(document),
            SectionKey::WhereCanYouGo => normalize_as::<WhereCanYouGoContent>(document),
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionKey {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(SectionKey::Hero),
            "approach" => Ok(SectionKey::Approach),
            "programs" => Ok(SectionKey::Programs),
            "testimonials" => Ok(SectionKey::Testimonials),
            "about" => Ok(SectionKey::About),
            "contact" => Ok(SectionKey::Contact),
            "where_can_you_go" | "where-can-you-go" => Ok(SectionKey::WhereCanYouGo),
            other => Err(ContentError::UnknownSection(other.to_string())),
        }
    }
}

fn default_json<T: ContentSection>() -> Value {
    // Section structs are plain strings/vecs/options, so serialization cannot fail.
    serde_json::to_value(T::default()).unwrap_or(Value::Null)
}

fn normalize_as<T: ContentSection>(document: Value) -> Result<Value, ContentError> {
    let typed: T = serde_json::from_value(document).map_err(|e| ContentError::InvalidDocument {
        section: T::KEY,
        reason: e.to_string(),
    })?;
    serde_json::to_value(typed).map_err(|e| ContentError::InvalidDocument {
        section: T::KEY,
        reason: e.to_string(),
    })
}
