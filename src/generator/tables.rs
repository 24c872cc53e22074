//! Fixed vocabularies backing the corpus generator.
//!
//! Everything here is static data: location categories, the amenity and
//! feature lists the description composer samples from, subdivision lists
//! per country, and the cancellation-policy phrases.

use crate::models::Country;

/// Location categories a property can be tagged with
pub const LOCATIONS: [&str; 30] = [
    "Beachfront",
    "Mountain View",
    "Downtown",
    "Desert",
    "Oceanfront",
    "Historic District",
    "Lakeside",
    "Countryside",
    "City Center",
    "Riverside",
    "Business District",
    "Wine Country",
    "Government District",
    "Tech Hub",
    "Plains",
    "Valley",
    "Forest",
    "Industrial District",
    "Gulf Coast",
    "Bay Area",
    "Ranch Land",
    "Wilderness",
    "Tropical Beach",
    "Financial District",
    "Coastal",
    "Suburban",
    "University District",
    "Ski Resort",
    "Riverfront",
    "Island",
];

/// Property-type suffixes used both for naming and for type inference
pub const PROPERTY_TYPES: [&str; 8] = [
    "Resort", "Hotel", "Lodge", "Inn", "Suites", "Manor", "Retreat", "Cabin",
];

/// Cancellation-policy phrases
pub const CANCELLATION_POLICIES: [&str; 9] = [
    "Full refund if cancelled 48 hours prior",
    "50% if cancelled within 48 hours",
    "No penalty if cancelled 72 hours prior",
    "20% penalty if cancelled within 48 hours",
    "25% penalty if cancelled within 24 hours",
    "30% penalty if cancelled within 72 hours",
    "40% penalty if cancelled within 24 hours",
    "10% penalty if cancelled within 24 hours",
    "15% penalty if cancelled within 24 hours",
];

/// Amenity list for a location category, with a generic fallback
pub fn amenities_for(location: &str) -> &'static [&'static str] {
    match location {
        "Beachfront" => &[
            "private beach access",
            "ocean views",
            "beachside dining",
            "water sports equipment",
            "sunset terraces",
        ],
        "Mountain View" => &[
            "hiking trails",
            "mountain vistas",
            "fireplaces",
            "ski access",
            "nature walks",
        ],
        "Downtown" => &[
            "city skyline views",
            "rooftop bar",
            "business center",
            "metro access",
            "shopping nearby",
        ],
        "Desert" => &[
            "desert landscapes",
            "stargazing decks",
            "spa services",
            "golf course",
            "pool oasis",
        ],
        "Oceanfront" => &[
            "panoramic ocean views",
            "private balconies",
            "seafood restaurant",
            "marina access",
            "lighthouse views",
        ],
        "Historic District" => &[
            "heritage architecture",
            "antique furnishings",
            "guided tours",
            "period details",
            "cobblestone streets",
        ],
        "Lakeside" => &[
            "lake views",
            "fishing pier",
            "boat rentals",
            "lakefront dining",
            "swimming area",
        ],
        "Countryside" => &[
            "rolling hills",
            "farm-to-table dining",
            "horseback riding",
            "wine tasting",
            "pastoral views",
        ],
        "City Center" => &[
            "urban sophistication",
            "fine dining",
            "theater district",
            "shopping centers",
            "nightlife",
        ],
        "Riverside" => &[
            "river views",
            "kayak rentals",
            "riverside trails",
            "fishing spots",
            "peaceful setting",
        ],
        "Business District" => &[
            "conference facilities",
            "executive services",
            "high-speed internet",
            "corporate rates",
            "meeting rooms",
        ],
        "Wine Country" => &[
            "vineyard views",
            "wine tastings",
            "cellar tours",
            "gourmet dining",
            "harvest experiences",
        ],
        "Government District" => &[
            "historic landmarks",
            "monument views",
            "political tours",
            "security features",
            "diplomatic services",
        ],
        "Tech Hub" => &[
            "high-tech amenities",
            "fast WiFi",
            "co-working spaces",
            "innovation center",
            "startup networking",
        ],
        "Plains" => &[
            "wide open spaces",
            "prairie views",
            "outdoor activities",
            "peaceful atmosphere",
            "starry nights",
        ],
        "Valley" => &[
            "valley panoramas",
            "scenic drives",
            "hiking paths",
            "fresh air",
            "mountain backdrops",
        ],
        "Forest" => &[
            "forest trails",
            "wildlife viewing",
            "cabin atmosphere",
            "outdoor adventures",
            "nature immersion",
        ],
        "Industrial District" => &[
            "modern design",
            "converted warehouses",
            "urban loft style",
            "art galleries",
            "trendy restaurants",
        ],
        "Gulf Coast" => &[
            "gulf waters",
            "seafood cuisine",
            "coastal charm",
            "fishing charters",
            "beach activities",
        ],
        "Bay Area" => &[
            "bay views",
            "maritime culture",
            "sailing opportunities",
            "waterfront dining",
            "harbor tours",
        ],
        "Ranch Land" => &[
            "ranch experiences",
            "horseback riding",
            "cattle drives",
            "cowboy culture",
            "wide open spaces",
        ],
        "Wilderness" => &[
            "untouched nature",
            "wildlife encounters",
            "adventure activities",
            "eco-tours",
            "camping options",
        ],
        "Tropical Beach" => &[
            "white sand beaches",
            "palm trees",
            "tropical drinks",
            "snorkeling",
            "paradise setting",
        ],
        "Financial District" => &[
            "luxury accommodations",
            "business services",
            "upscale dining",
            "premium location",
            "executive floors",
        ],
        "Coastal" => &[
            "coastal breezes",
            "seaside charm",
            "lighthouse tours",
            "beach walks",
            "maritime history",
        ],
        "Suburban" => &[
            "family-friendly",
            "quiet neighborhoods",
            "local attractions",
            "easy access",
            "comfortable setting",
        ],
        "University District" => &[
            "academic atmosphere",
            "student discounts",
            "cultural events",
            "library access",
            "campus tours",
        ],
        "Ski Resort" => &[
            "ski slopes",
            "winter sports",
            "alpine dining",
            "mountain lodges",
            "snow activities",
        ],
        "Riverfront" => &[
            "riverfront location",
            "water activities",
            "scenic beauty",
            "peaceful setting",
            "nature walks",
        ],
        "Island" => &[
            "island paradise",
            "tropical setting",
            "water activities",
            "secluded beaches",
            "resort atmosphere",
        ],
        _ => &[
            "scenic views",
            "comfortable accommodations",
            "friendly service",
        ],
    }
}

/// Feature list for a property type, with a generic fallback
pub fn features_for(property_type: &str) -> &'static [&'static str] {
    match property_type {
        "Resort" => &[
            "luxury amenities",
            "spa services",
            "multiple restaurants",
            "recreational facilities",
            "concierge service",
        ],
        "Hotel" => &[
            "comfortable rooms",
            "room service",
            "front desk",
            "housekeeping",
            "guest services",
        ],
        "Lodge" => &[
            "rustic charm",
            "cozy atmosphere",
            "outdoor activities",
            "lodge dining",
            "nature setting",
        ],
        "Inn" => &[
            "intimate setting",
            "personalized service",
            "local charm",
            "historic character",
            "boutique experience",
        ],
        "Suites" => &[
            "spacious accommodations",
            "separate living areas",
            "kitchen facilities",
            "extended stay options",
            "business amenities",
        ],
        "Manor" => &[
            "elegant architecture",
            "luxurious interiors",
            "historic grandeur",
            "fine dining",
            "exclusive atmosphere",
        ],
        "Retreat" => &[
            "peaceful environment",
            "wellness programs",
            "meditation spaces",
            "healthy cuisine",
            "rejuvenation focus",
        ],
        "Cabin" => &[
            "rustic accommodations",
            "nature immersion",
            "outdoor adventures",
            "cozy interiors",
            "campfire areas",
        ],
        _ => &["quality accommodations", "excellent service"],
    }
}

/// Location-specific descriptive clause, where one exists
pub fn location_clause(location: &str) -> Option<&'static str> {
    let clause = match location {
        "Beachfront" => "steps away from pristine sandy beaches",
        "Mountain View" => "surrounded by majestic mountain peaks",
        "Downtown" => "in the heart of the bustling city center",
        "Desert" => "amidst stunning desert landscapes",
        "Oceanfront" => "with breathtaking ocean vistas",
        "Historic District" => "steeped in rich cultural heritage",
        "Lakeside" => "overlooking tranquil lake waters",
        "Countryside" => "set in picturesque rural surroundings",
        "City Center" => "at the pulse of urban excitement",
        "Riverside" => "along the peaceful riverbank",
        "Wine Country" => "surrounded by rolling vineyards",
        "Ski Resort" => "at the base of world-class ski slopes",
        "Island" => "on a secluded tropical island",
        _ => return None,
    };
    Some(clause)
}

/// Country-specific closing clause for descriptions
pub fn country_closing(country: Country) -> &'static str {
    match country {
        Country::Usa => "making it the perfect choice for your American adventure.",
        Country::Canada => "providing an authentic Canadian hospitality experience.",
        Country::Mexico => {
            "offering you a taste of Mexico's warm hospitality and vibrant culture."
        }
    }
}

/// Subdivision (state/province) list for a country
pub fn subdivisions(country: Country) -> &'static [&'static str] {
    match country {
        Country::Usa => &US_STATES,
        Country::Canada => &CANADIAN_PROVINCES,
        Country::Mexico => &MEXICAN_STATES,
    }
}

pub const US_STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

pub const CANADIAN_PROVINCES: [&str; 13] = [
    "Alberta",
    "British Columbia",
    "Manitoba",
    "New Brunswick",
    "Newfoundland and Labrador",
    "Northwest Territories",
    "Nova Scotia",
    "Nunavut",
    "Ontario",
    "Prince Edward Island",
    "Quebec",
    "Saskatchewan",
    "Yukon",
];

pub const MEXICAN_STATES: [&str; 31] = [
    "Aguascalientes",
    "Baja California",
    "Baja California Sur",
    "Campeche",
    "Chiapas",
    "Chihuahua",
    "Coahuila",
    "Colima",
    "Durango",
    "Guanajuato",
    "Guerrero",
    "Hidalgo",
    "Jalisco",
    "México",
    "Michoacán",
    "Morelos",
    "Nayarit",
    "Nuevo León",
    "Oaxaca",
    "Puebla",
    "Querétaro",
    "Quintana Roo",
    "San Luis Potosí",
    "Sinaloa",
    "Sonora",
    "Tabasco",
    "Tamaulipas",
    "Tlaxcala",
    "Veracruz",
    "Yucatán",
    "Zacatecas",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_location_has_a_nonempty_amenity_list() {
        for location in LOCATIONS {
            assert!(!amenities_for(location).is_empty(), "{location}");
        }
    }

    #[test]
    fn unknown_keys_fall_back() {
        assert_eq!(amenities_for("Moon Base").len(), 3);
        assert_eq!(features_for("Bunker").len(), 2);
        assert!(location_clause("Moon Base").is_none());
    }

    #[test]
    fn every_property_type_has_features() {
        for ptype in PROPERTY_TYPES {
            assert!(features_for(ptype).len() >= 3, "{ptype}");
        }
    }

    #[test]
    fn subdivision_lists_match_expected_sizes() {
        assert_eq!(subdivisions(Country::Usa).len(), 50);
        assert_eq!(subdivisions(Country::Canada).len(), 13);
        assert_eq!(subdivisions(Country::Mexico).len(), 31);
    }
}
