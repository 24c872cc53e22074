use serde::{Deserialize, Serialize};

/// Country a generated property is located in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    Canada,
    Mexico,
}

impl Country {
    /// All countries the generator samples from
    pub const ALL: [Country; 3] = [Country::Usa, Country::Canada, Country::Mexico];

    /// Name as it appears in the serialized record
    pub fn name(&self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Canada => "Canada",
            Country::Mexico => "Mexico",
        }
    }
}

/// Core property record model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: u32,
    pub property_name: String,
    pub property_description: String,
    pub property_location: String,
    pub property_city: String,
    pub property_state: String,
    pub property_country: Country,
    pub property_address: String,
    pub property_phone_number: String,
    pub property_email_address: String,
    pub property_airport_proximity: String,
    pub property_price_per_night: f64,
    pub property_commission_amount: f64,
    pub property_cancellation_penalty: String,
}

/// Top-level shape of the serialized corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyCorpus {
    pub properties: Vec<PropertyRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let record = PropertyRecord {
            id: 1,
            property_name: "Harborview Lodge".to_string(),
            property_description: "A quiet lodge.".to_string(),
            property_location: "Lakeside".to_string(),
            property_city: "Springfield".to_string(),
            property_state: "Vermont".to_string(),
            property_country: Country::Usa,
            property_address: "12 Oak St, Springfield, VT 05156".to_string(),
            property_phone_number: "(802) 555-0114".to_string(),
            property_email_address: "info@harborviewlodge.com".to_string(),
            property_airport_proximity: "8 miles from Springfield International Airport"
                .to_string(),
            property_price_per_night: 120.5,
            property_commission_amount: 18.08,
            property_cancellation_penalty: "Full refund if cancelled 48 hours prior".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        let fields = value.as_object().unwrap();
        assert_eq!(fields.len(), 14);
        assert_eq!(fields["propertyName"], "Harborview Lodge");
        assert_eq!(fields["propertyCountry"], "USA");
        assert_eq!(fields["propertyPricePerNight"], 120.5);
    }

    #[test]
    fn country_round_trips_through_serde() {
        for country in Country::ALL {
            let json = serde_json::to_string(&country).unwrap();
            assert_eq!(json, format!("\"{}\"", country.name()));
            let back: Country = serde_json::from_str(&json).unwrap();
            assert_eq!(back, country);
        }
    }
}
