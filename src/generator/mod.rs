pub mod corpus;
pub mod description;
pub mod locale;
pub mod names;
pub mod tables;
pub mod types;

pub use corpus::CorpusGenerator;
pub use types::GeneratorParams;

use rand::Rng;

/// Uniform choice from a non-empty static table
pub(crate) fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}
