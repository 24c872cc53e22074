//! The record generator: one linear pass building the property corpus.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::generator::description::compose_description;
use crate::generator::locale::LocaleFaker;
use crate::generator::names::{email_for, unique_property_names};
use crate::generator::pick;
use crate::generator::tables::{subdivisions, CANCELLATION_POLICIES, LOCATIONS};
use crate::generator::types::GeneratorParams;
use crate::models::{Country, PropertyRecord};

const PRICE_RANGE: std::ops::RangeInclusive<f64> = 75.0..=750.0;
const COMMISSION_RANGE: std::ops::RangeInclusive<f64> = 0.10..=0.20;
const AIRPORT_MILES: std::ops::RangeInclusive<u32> = 2..=30;

/// Corpus generator owning the two seeded random sources
pub struct CorpusGenerator {
    rng: StdRng,
    faker: LocaleFaker,
    params: GeneratorParams,
}

impl CorpusGenerator {
    /// Create a generator with the default parameters (1000 records)
    pub fn new() -> Self {
        Self::with_params(GeneratorParams::default())
    }

    /// Create a generator with custom parameters
    pub fn with_params(params: GeneratorParams) -> Self {
        Self {
            rng: StdRng::seed_from_u64(params.sample_seed),
            faker: LocaleFaker::with_seed(params.faker_seed),
            params,
        }
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Generate the full record set, ids 1..=record_count
    pub fn generate(&mut self) -> Result<Vec<PropertyRecord>> {
        let count = self.params.record_count;

        info!("Collecting {} unique property names", count);
        let names = unique_property_names(&mut self.faker, &mut self.rng, count)?;

        info!("Sampling {} property records", count);
        let mut records = Vec::with_capacity(count);

        for (index, name) in names.into_iter().enumerate() {
            let record = self.build_record(index as u32 + 1, name);
            if record.id <= 3 {
                debug!("Record {}: {}", record.id, record.property_name);
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Sample one record; country first, then country-consistent fields
    fn build_record(&mut self, id: u32, name: String) -> PropertyRecord {
        let country = pick_country(&mut self.rng);
        let state = pick(&mut self.rng, subdivisions(country));
        let city = self.faker.city(country);
        let address = self.faker.address(country);
        let phone = self.faker.phone_number(country);

        let location = pick(&mut self.rng, &LOCATIONS);

        let airport_proximity = format!(
            "{} miles from {} International Airport",
            self.rng.gen_range(AIRPORT_MILES),
            self.faker.city(country)
        );

        let price = round_cents(self.rng.gen_range(PRICE_RANGE));
        let commission = round_cents(price * self.rng.gen_range(COMMISSION_RANGE));
        let cancellation = pick(&mut self.rng, &CANCELLATION_POLICIES);

        let description = compose_description(&mut self.rng, &name, location, country);
        let email = email_for(&name);

        PropertyRecord {
            id,
            property_name: name,
            property_description: description,
            property_location: location.to_string(),
            property_city: city,
            property_state: state.to_string(),
            property_country: country,
            property_address: address,
            property_phone_number: phone,
            property_email_address: email,
            property_airport_proximity: airport_proximity,
            property_price_per_night: price,
            property_commission_amount: commission,
            property_cancellation_penalty: cancellation.to_string(),
        }
    }
}

impl Default for CorpusGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_country(rng: &mut StdRng) -> Country {
    Country::ALL[rng.gen_range(0..Country::ALL.len())]
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
