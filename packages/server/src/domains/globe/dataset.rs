//! Compiled-in destination table.
//!
//! Loaded once for the process lifetime; editing destinations is a code change,
//! not an admin-panel operation.

use super::models::{Location, Program};

/// Home office the outbound arcs start from (New York)
pub const HUB: (f64, f64) = (40.7128, -74.0060);

pub const LOCATIONS: &[Location] = &[
    Location {
        id: "tokyo",
        city: "Tokyo",
        country: "Japan",
        latitude: 35.6762,
        longitude: 139.6503,
        flag_code: "jp",
        programs: &[
            Program {
                name: "Japanese Language Immersion",
                description: "Intensive language study paired with a homestay and weekly cultural workshops.",
                duration: "4 weeks",
                slug: "japanese-language-immersion",
            },
            Program {
                name: "Robotics & Innovation Lab",
                description: "Hands-on engineering projects with partner universities and industry site visits.",
                duration: "2 weeks",
                slug: "tokyo-robotics-lab",
            },
        ],
    },
    Location {
        id: "seoul",
        city: "Seoul",
        country: "South Korea",
        latitude: 37.5665,
        longitude: 126.9780,
        flag_code: "kr",
        programs: &[Program {
            name: "Korean Culture & Media",
            description: "Explore contemporary Korean media, design and language alongside local students.",
            duration: "3 weeks",
            slug: "korean-culture-media",
        }],
    },
    Location {
        id: "london",
        city: "London",
        country: "United Kingdom",
        latitude: 51.5074,
        longitude: -0.1278,
        flag_code: "gb",
        programs: &[
            Program {
                name: "Leadership & Public Speaking",
                description: "Debate, rhetoric and leadership coaching hosted at historic colleges.",
                duration: "2 weeks",
                slug: "london-leadership",
            },
            Program {
                name: "University Pathway Semester",
                description: "A full academic term with credit transfer to partner institutions.",
                duration: "1 semester",
                slug: "london-university-pathway",
            },
        ],
    },
    Location {
        id: "paris",
        city: "Paris",
        country: "France",
        latitude: 48.8566,
        longitude: 2.3522,
        flag_code: "fr",
        programs: &[Program {
            name: "Art History & French",
            description: "Museum-based art history seminars combined with daily French instruction.",
            duration: "3 weeks",
            slug: "paris-art-history",
        }],
    },
    Location {
        id: "barcelona",
        city: "Barcelona",
        country: "Spain",
        latitude: 41.3874,
        longitude: 2.1686,
        flag_code: "es",
        programs: &[Program {
            name: "Spanish & Sustainable Cities",
            description: "Urban design fieldwork and Spanish classes in one of Europe's greenest cities.",
            duration: "4 weeks",
            slug: "barcelona-sustainable-cities",
        }],
    },
    Location {
        id: "sydney",
        city: "Sydney",
        country: "Australia",
        latitude: -33.8688,
        longitude: 151.2093,
        flag_code: "au",
        programs: &[Program {
            name: "Marine Science Expedition",
            description: "Coastal ecology research with field days on the harbour and nearby reefs.",
            duration: "3 weeks",
            slug: "sydney-marine-science",
        }],
    },
    Location {
        id: "toronto",
        city: "Toronto",
        country: "Canada",
        latitude: 43.6532,
        longitude: -79.3832,
        flag_code: "ca",
        programs: &[Program {
            name: "Entrepreneurship Bootcamp",
            description: "Build and pitch a venture with mentors from the local startup community.",
            duration: "2 weeks",
            slug: "toronto-entrepreneurship",
        }],
    },
    Location {
        id: "san-jose",
        city: "San José",
        country: "Costa Rica",
        latitude: 9.9281,
        longitude: -84.0907,
        flag_code: "cr",
        programs: &[Program {
            name: "Rainforest Conservation",
            description: "Biodiversity surveys and community service projects in protected reserves.",
            duration: "2 weeks",
            slug: "costa-rica-conservation",
        }],
    },
];

/// All destinations in display order
pub fn locations() -> &'static [Location] {
    LOCATIONS
}

pub fn find_location(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|location| location.id == id)
}

/// Look up a program by its navigation slug, together with its destination
pub fn find_program(slug: &str) -> Option<(&'static Location, &'static Program)> {
    LOCATIONS.iter().find_map(|location| {
        location
            .programs
            .iter()
            .find(|program| program.slug == slug)
            .map(|program| (location, program))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_and_slugs_are_unique() {
        let ids: HashSet<_> = LOCATIONS.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), LOCATIONS.len());

        let slugs: Vec<_> = LOCATIONS
            .iter()
            .flat_map(|l| l.programs.iter().map(|p| p.slug))
            .collect();
        let unique: HashSet<_> = slugs.iter().collect();
        assert_eq!(unique.len(), slugs.len());
    }

    #[test]
    fn test_coordinates_in_range() {
        for location in LOCATIONS {
            assert!((-90.0..=90.0).contains(&location.latitude), "{}", location.id);
            assert!((-180.0..=180.0).contains(&location.longitude), "{}", location.id);
            assert_eq!(location.flag_code.len(), 2, "{}", location.id);
            assert!(!location.programs.is_empty(), "{}", location.id);
        }
    }

    #[test]
    fn test_find_location() {
        assert_eq!(find_location("paris").map(|l| l.city), Some("Paris"));
        assert!(find_location("atlantis").is_none());
    }

    #[test]
    fn test_find_program() {
        let (location, program) = find_program("sydney-marine-science").unwrap();
        assert_eq!(location.id, "sydney");
        assert_eq!(program.duration, "3 weeks");
        assert!(find_program("missing").is_none());
    }
}
