use juniper::GraphQLObject;

use crate::domains::globe::models::{GlobeArc, Location, Program};

/// Destination GraphQL type
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "An exchange destination shown on the globe")]
pub struct LocationData {
    pub id: String,
    pub city: String,
    pub country: String,
    /// "City, Country" label for tooltips
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Two-letter flag code
    pub flag_code: String,
    pub programs: Vec<ProgramData>,
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct ProgramData {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub slug: String,
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "Decorative arc drawn between the home office and a destination")]
pub struct GlobeArcData {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub arc_alt: f64,
    pub distance_km: f64,
    pub color: String,
    /// Animation stagger index
    pub order: i32,
}

impl From<&Program> for ProgramData {
    fn from(program: &Program) -> Self {
        Self {
            name: program.name.to_string(),
            description: program.description.to_string(),
            duration: program.duration.to_string(),
            slug: program.slug.to_string(),
        }
    }
}

impl From<&Location> for LocationData {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.to_string(),
            city: location.city.to_string(),
            country: location.country.to_string(),
            display_name: location.display_name(),
            latitude: location.latitude,
            longitude: location.longitude,
            flag_code: location.flag_code.to_string(),
            programs: location.programs.iter().map(ProgramData::from).collect(),
        }
    }
}

impl From<GlobeArc> for GlobeArcData {
    fn from(arc: GlobeArc) -> Self {
        Self {
            start_lat: arc.start_lat,
            start_lng: arc.start_lng,
            end_lat: arc.end_lat,
            end_lng: arc.end_lng,
            arc_alt: arc.arc_alt,
            distance_km: arc.distance_km,
            color: arc.color.to_string(),
            order: arc.order as i32,
        }
    }
}
