//! Template-driven description prose for a generated property.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::generator::tables::{
    amenities_for, country_closing, features_for, location_clause, PROPERTY_TYPES,
};
use crate::models::Country;

const AMENITY_SAMPLE: usize = 4;
const FEATURE_SAMPLE: usize = 3;

/// Compose one paragraph of descriptive prose for a property.
///
/// The property type is inferred by substring match against the type
/// vocabulary (defaulting to "Hotel"), then an opening template, a
/// location clause, a shuffled blend of amenities and type features, and
/// a country closing are joined together.
pub fn compose_description(
    rng: &mut StdRng,
    name: &str,
    location: &str,
    country: Country,
) -> String {
    let property_type = PROPERTY_TYPES
        .iter()
        .find(|t| name.contains(*t))
        .copied()
        .unwrap_or("Hotel");

    let amenities = amenities_for(location);
    let features = features_for(property_type);

    let opening = opening_line(rng, name, location);

    let clause = match location_clause(location) {
        Some(clause) => clause.to_string(),
        None => format!("in a beautiful {} setting", location.to_lowercase()),
    };

    // 4 amenities and 3 features without replacement, blended together.
    let mut blended: Vec<&str> = amenities
        .choose_multiple(rng, AMENITY_SAMPLE)
        .chain(features.choose_multiple(rng, FEATURE_SAMPLE))
        .copied()
        .collect();
    blended.shuffle(rng);

    let feature_text = if blended.len() >= 3 {
        let mut text = format!("Enjoy {}, {}, and {}", blended[0], blended[1], blended[2]);
        if blended.len() > 3 {
            text.push_str(&format!(", along with {}", blended[3..].join(", ")));
        }
        text
    } else {
        format!("Experience {}", blended.join(" and "))
    };

    let closing = country_closing(country);

    format!(
        "{} Located {}, our property combines modern comfort with local charm. {}, {}",
        opening, clause, feature_text, closing
    )
}

fn opening_line(rng: &mut StdRng, name: &str, location: &str) -> String {
    match rng.gen_range(0..5) {
        0 => format!(
            "Discover the perfect blend of comfort and luxury at {}.",
            name
        ),
        1 => format!("Experience exceptional hospitality at {}.", name),
        2 => format!("Welcome to {}, where comfort meets elegance.", name),
        3 => format!(
            "Nestled in a prime {} location, {} offers an unforgettable experience.",
            location.to_lowercase(),
            name
        ),
        _ => format!("{} provides the ideal escape for discerning travelers.", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn description_mentions_the_blended_vocabulary() {
        let mut rng = StdRng::seed_from_u64(42);
        let description =
            compose_description(&mut rng, "Thornton Group Lodge", "Lakeside", Country::Canada);

        assert!(description.contains("overlooking tranquil lake waters"));
        assert!(description.contains("providing an authentic Canadian hospitality experience."));
        // 4 amenities + 3 features always yields the long feature sentence.
        assert!(description.contains("Enjoy "));
        assert!(description.contains(", along with "));
    }

    #[test]
    fn unknown_location_falls_back_to_generic_clause() {
        let mut rng = StdRng::seed_from_u64(42);
        let description =
            compose_description(&mut rng, "Mercer Inc Hotel", "Plains", Country::Usa);

        assert!(description.contains("in a beautiful plains setting"));
    }

    #[test]
    fn type_inference_defaults_to_hotel_features() {
        let mut rng = StdRng::seed_from_u64(42);
        // No type suffix in the name, so Hotel features are in play; with a
        // fixed seed at least one of the five must surface.
        let description =
            compose_description(&mut rng, "Prescott Group", "Downtown", Country::Usa);

        let hotel_features = features_for("Hotel");
        assert!(
            hotel_features.iter().any(|f| description.contains(f)),
            "{description}"
        );
    }

    #[test]
    fn same_seed_composes_identical_prose() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        assert_eq!(
            compose_description(&mut a, "Dawson & Yates Resort", "Island", Country::Mexico),
            compose_description(&mut b, "Dawson & Yates Resort", "Island", Country::Mexico)
        );
    }
}
