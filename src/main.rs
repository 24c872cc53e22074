use anyhow::Context;
use property_forge::models::{Country, PropertyCorpus};
use property_forge::CorpusGenerator;
use tracing::{info, Level};
use tracing_subscriber;

const OUTPUT_FILE: &str = "propertyFiles.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏨 Property Forge - Lodging Corpus Generator");
    info!("=============================================");
    info!("");

    let mut generator = CorpusGenerator::new();
    let count = generator.params().record_count;

    info!("Generating {} fictitious lodging properties...", count);
    info!("");

    let properties = generator.generate()?;

    // Display results
    info!("\n✅ Generated {} properties\n", properties.len());

    for country in Country::ALL {
        let per_country = properties
            .iter()
            .filter(|p| p.property_country == country)
            .count();
        info!("   {} properties: {}", country.name(), per_country);
    }

    if let Some(sample) = properties.first() {
        info!("");
        info!("Sample property: {}", sample.property_name);
        info!("   {}", sample.property_description);
    }

    // Save the corpus as one JSON document
    let corpus = PropertyCorpus { properties };
    let json = serde_json::to_string_pretty(&corpus)?;
    tokio::fs::write(OUTPUT_FILE, json)
        .await
        .context("Failed to write corpus file")?;
    info!("💾 Saved all properties to {}", OUTPUT_FILE);

    Ok(())
}
