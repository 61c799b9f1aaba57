use serde::Serialize;

/// An exchange destination shown on the globe
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// ISO 3166-1 alpha-2 code, lowercase (used to pick the flag asset)
    pub flag_code: &'static str,
    /// Programs in display order
    pub programs: &'static [Program],
}

/// A program offered at a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    /// Navigation slug for the program detail page
    pub slug: &'static str,
}

/// Cosmetic arc between two coordinates
///
/// `order` only staggers the draw-in animation; arcs carry no graph semantics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobeArc {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    /// Peak altitude relative to the globe radius
    pub arc_alt: f64,
    /// Great-circle length of the hop
    pub distance_km: f64,
    pub color: &'static str,
    pub order: u32,
}

impl Location {
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}
