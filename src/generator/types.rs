use serde::{Deserialize, Serialize};

/// Parameters for corpus generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// Number of records to generate
    pub record_count: usize,
    /// Seed for the sampling RNG (countries, tables, numeric fields)
    pub sample_seed: u64,
    /// Seed for the locale faker (company names, cities, addresses, phones)
    pub faker_seed: u64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            record_count: 1000,
            sample_seed: 1234,
            faker_seed: 1234,
        }
    }
}
