//! Unique property-name collection and contact-email derivation.

use anyhow::Result;
use rand::rngs::StdRng;
use std::collections::HashSet;

use crate::generator::locale::LocaleFaker;
use crate::generator::pick;
use crate::generator::tables::PROPERTY_TYPES;

// Attempts allowed per needed name before giving up on uniqueness.
const ATTEMPTS_PER_NAME: usize = 50;

/// Collect `count` distinct property names of the form
/// `<company-like string> <property-type suffix>`, in first-drawn order.
pub fn unique_property_names(
    faker: &mut LocaleFaker,
    rng: &mut StdRng,
    count: usize,
) -> Result<Vec<String>> {
    let mut seen = HashSet::with_capacity(count);
    let mut names = Vec::with_capacity(count);
    let mut attempts = 0usize;

    while names.len() < count {
        attempts += 1;
        if attempts > count.saturating_mul(ATTEMPTS_PER_NAME) {
            anyhow::bail!(
                "exhausted name search after {} attempts ({} of {} collected)",
                attempts,
                names.len(),
                count
            );
        }

        let name = format!("{} {}", faker.company(), pick(rng, &PROPERTY_TYPES));
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }

    Ok(names)
}

/// Contact email derived from a property name: lower-cased, spaces removed,
/// `&` spelled out, hyphens and commas dropped.
pub fn email_for(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .replace(' ', "")
        .replace('&', "and")
        .replace('-', "")
        .replace(',', "");
    format!("info@{slug}.com")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn collects_the_requested_number_of_distinct_names() {
        let mut faker = LocaleFaker::with_seed(1234);
        let mut rng = StdRng::seed_from_u64(1234);
        let names = unique_property_names(&mut faker, &mut rng, 500).unwrap();

        assert_eq!(names.len(), 500);
        let distinct: HashSet<_> = names.iter().collect();
        assert_eq!(distinct.len(), names.len());
    }

    #[test]
    fn every_name_ends_with_a_property_type() {
        let mut faker = LocaleFaker::with_seed(1234);
        let mut rng = StdRng::seed_from_u64(1234);
        let names = unique_property_names(&mut faker, &mut rng, 100).unwrap();

        for name in &names {
            assert!(
                PROPERTY_TYPES.iter().any(|t| name.ends_with(t)),
                "{name}"
            );
        }
    }

    #[test]
    fn email_strips_spaces_hyphens_commas_and_spells_out_ampersands() {
        assert_eq!(
            email_for("Mercer & Vaughn Resort"),
            "info@mercerandvaughnresort.com"
        );
        assert_eq!(
            email_for("Keller-Radford Lodge"),
            "info@kellerradfordlodge.com"
        );
        assert_eq!(
            email_for("Barrett, Sutton and Monroe Inn"),
            "info@barrettsuttonandmonroeinn.com"
        );
        assert_eq!(email_for("Harding Ltd Hotel"), "info@hardingltdhotel.com");
    }
}
