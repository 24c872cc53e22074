//! Synthesizes a corpus of fictitious lodging-property records and
//! serializes it as an indented JSON document for use as sample data.

pub mod generator;
pub mod models;

pub use generator::{CorpusGenerator, GeneratorParams};
pub use models::{Country, PropertyCorpus, PropertyRecord};
