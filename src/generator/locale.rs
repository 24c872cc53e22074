//! Seeded locale faker for company names, cities, addresses and phones.
//!
//! Composes realistic-looking strings from word tables, formatted per
//! country convention: NANP phone numbers and ZIP codes for the USA,
//! lettered postal codes for Canada, Spanish street and city vocabulary
//! with C.P. codes for Mexico. The faker owns its own RNG so the name
//! stream can be seeded independently of the sampling RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::generator::pick;
use crate::models::Country;

const FIRST_NAMES: [&str; 24] = [
    "Amanda", "Brian", "Carmen", "Derek", "Elena", "Frank", "Gloria", "Hector", "Irene",
    "Jason", "Karen", "Lucas", "Monica", "Nathan", "Olivia", "Preston", "Rachel", "Samuel",
    "Teresa", "Victor", "Wendy", "Xavier", "Yvonne", "Zachary",
];

const SURNAMES: [&str; 30] = [
    "Anderson", "Bennett", "Carpenter", "Dawson", "Ellison", "Fletcher", "Graham", "Harding",
    "Ingram", "Jennings", "Keller", "Lambert", "Mercer", "Norwood", "Osborne", "Prescott",
    "Quimby", "Radford", "Sheldon", "Thornton", "Underhill", "Vaughn", "Whitfield", "Yates",
    "Zimmerman", "Holloway", "Caldwell", "Sutton", "Barrett", "Monroe",
];

const COMPANY_SUFFIXES: [&str; 6] = ["Inc", "and Sons", "LLC", "Group", "PLC", "Ltd"];

const CITY_PREFIXES: [&str; 7] = ["North", "East", "West", "South", "New", "Lake", "Port"];

const CITY_SUFFIXES: [&str; 14] = [
    "town", "ton", "land", "ville", "berg", "borough", "view", "port", "mouth", "stad",
    "chester", "fort", "haven", "side",
];

const STREET_SUFFIXES: [&str; 12] = [
    "Street", "Avenue", "Drive", "Boulevard", "Lane", "Way", "Road", "Court", "Place",
    "Terrace", "Crossing", "Parkway",
];

const SPANISH_NAMES: [&str; 18] = [
    "Alejandro", "Beatriz", "Carlos", "Dolores", "Esteban", "Fernanda", "Guadalupe", "Ignacio",
    "Josefina", "Leticia", "Mariano", "Natalia", "Octavio", "Pilar", "Rosario", "Santiago",
    "Valentina", "Ximena",
];

const SPANISH_STREET_TYPES: [&str; 6] = [
    "Calle", "Avenida", "Privada", "Cerrada", "Callejón", "Boulevard",
];

const US_STATE_ABBREVIATIONS: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

const CANADIAN_PROVINCE_ABBREVIATIONS: [&str; 13] = [
    "AB", "BC", "MB", "NB", "NL", "NT", "NS", "NU", "ON", "PE", "QC", "SK", "YT",
];

// Letters valid in Canadian postal codes (D, F, I, O, Q, U are never used).
const POSTAL_LETTERS: [&str; 18] = [
    "A", "B", "C", "E", "G", "H", "J", "K", "L", "M", "N", "P", "R", "S", "T", "V", "X", "Y",
];

/// Word-table faker with its own seeded RNG
pub struct LocaleFaker {
    rng: StdRng,
}

impl LocaleFaker {
    /// Create a faker producing a reproducible stream for the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Company-like name: suffixed, hyphenated, listed, or ampersand form
    pub fn company(&mut self) -> String {
        match self.rng.gen_range(0..4) {
            0 => format!(
                "{} {}",
                pick(&mut self.rng, &SURNAMES),
                pick(&mut self.rng, &COMPANY_SUFFIXES)
            ),
            1 => format!(
                "{}-{}",
                pick(&mut self.rng, &SURNAMES),
                pick(&mut self.rng, &SURNAMES)
            ),
            2 => format!(
                "{}, {} and {}",
                pick(&mut self.rng, &SURNAMES),
                pick(&mut self.rng, &SURNAMES),
                pick(&mut self.rng, &SURNAMES)
            ),
            _ => format!(
                "{} & {}",
                pick(&mut self.rng, &SURNAMES),
                pick(&mut self.rng, &SURNAMES)
            ),
        }
    }

    /// City name formatted per country convention
    pub fn city(&mut self, country: Country) -> String {
        match country {
            Country::Usa | Country::Canada => match self.rng.gen_range(0..4) {
                0 => format!(
                    "{} {}{}",
                    pick(&mut self.rng, &CITY_PREFIXES),
                    pick(&mut self.rng, &FIRST_NAMES),
                    pick(&mut self.rng, &CITY_SUFFIXES)
                ),
                1 => format!(
                    "{} {}",
                    pick(&mut self.rng, &CITY_PREFIXES),
                    pick(&mut self.rng, &FIRST_NAMES)
                ),
                2 => format!(
                    "{}{}",
                    pick(&mut self.rng, &FIRST_NAMES),
                    pick(&mut self.rng, &CITY_SUFFIXES)
                ),
                _ => format!(
                    "{}{}",
                    pick(&mut self.rng, &SURNAMES),
                    pick(&mut self.rng, &CITY_SUFFIXES)
                ),
            },
            Country::Mexico => match self.rng.gen_range(0..5) {
                0 => format!("San {}", pick(&mut self.rng, &SPANISH_NAMES)),
                1 => format!("Santa {}", pick(&mut self.rng, &SPANISH_NAMES)),
                2 => format!("Nueva {}", pick(&mut self.rng, &SPANISH_NAMES)),
                3 => format!("{} de la Montaña", pick(&mut self.rng, &SPANISH_NAMES)),
                _ => format!("Ciudad {}", pick(&mut self.rng, &SPANISH_NAMES)),
            },
        }
    }

    /// Single-line street address including city and postal data
    pub fn address(&mut self, country: Country) -> String {
        let city = self.city(country);
        match country {
            Country::Usa => format!(
                "{}, {}, {} {}",
                self.street_line(country),
                city,
                pick(&mut self.rng, &US_STATE_ABBREVIATIONS),
                self.postal_code(country)
            ),
            Country::Canada => format!(
                "{}, {}, {} {}",
                self.street_line(country),
                city,
                pick(&mut self.rng, &CANADIAN_PROVINCE_ABBREVIATIONS),
                self.postal_code(country)
            ),
            Country::Mexico => format!(
                "{}, {}, C.P. {}",
                self.street_line(country),
                city,
                self.postal_code(country)
            ),
        }
    }

    /// Phone number formatted per country convention
    pub fn phone_number(&mut self, country: Country) -> String {
        match country {
            // NANP formats for the USA and Canada
            Country::Usa | Country::Canada => {
                let area = self.rng.gen_range(200..=999);
                let exchange = self.rng.gen_range(200..=999);
                let line = self.rng.gen_range(1000..=9999);
                match self.rng.gen_range(0..4) {
                    0 => format!("({area}) {exchange}-{line}"),
                    1 => format!("{area}-{exchange}-{line}"),
                    2 => format!("+1-{area}-{exchange}-{line}"),
                    _ => {
                        let extension = self.rng.gen_range(100..=9999);
                        format!("({area}) {exchange}-{line} x{extension}")
                    }
                }
            }
            Country::Mexico => match self.rng.gen_range(0..3) {
                0 => format!(
                    "+52 {} {:04} {:04}",
                    self.rng.gen_range(10..=99),
                    self.rng.gen_range(0..=9999),
                    self.rng.gen_range(0..=9999)
                ),
                1 => format!(
                    "({:03}) {:03}-{:04}",
                    self.rng.gen_range(200..=999),
                    self.rng.gen_range(0..=999),
                    self.rng.gen_range(0..=9999)
                ),
                _ => format!(
                    "01 {:03} {:03} {:04}",
                    self.rng.gen_range(200..=999),
                    self.rng.gen_range(0..=999),
                    self.rng.gen_range(0..=9999)
                ),
            },
        }
    }

    fn street_line(&mut self, country: Country) -> String {
        match country {
            Country::Usa | Country::Canada => {
                let number = self.rng.gen_range(1..=9999);
                let stem = if self.rng.gen_bool(0.5) {
                    pick(&mut self.rng, &FIRST_NAMES)
                } else {
                    pick(&mut self.rng, &SURNAMES)
                };
                format!(
                    "{} {} {}",
                    number,
                    stem,
                    pick(&mut self.rng, &STREET_SUFFIXES)
                )
            }
            Country::Mexico => format!(
                "{} {} {}",
                pick(&mut self.rng, &SPANISH_STREET_TYPES),
                pick(&mut self.rng, &SPANISH_NAMES),
                self.rng.gen_range(1..=999)
            ),
        }
    }

    fn postal_code(&mut self, country: Country) -> String {
        match country {
            Country::Usa | Country::Mexico => format!("{:05}", self.rng.gen_range(10000..=99999)),
            Country::Canada => format!(
                "{}{}{} {}{}{}",
                pick(&mut self.rng, &POSTAL_LETTERS),
                self.rng.gen_range(0..=9),
                pick(&mut self.rng, &POSTAL_LETTERS),
                self.rng.gen_range(0..=9),
                pick(&mut self.rng, &POSTAL_LETTERS),
                self.rng.gen_range(0..=9)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_same_stream() {
        let mut a = LocaleFaker::with_seed(1234);
        let mut b = LocaleFaker::with_seed(1234);
        for _ in 0..50 {
            assert_eq!(a.company(), b.company());
            assert_eq!(a.city(Country::Mexico), b.city(Country::Mexico));
            assert_eq!(a.address(Country::Usa), b.address(Country::Usa));
            assert_eq!(a.phone_number(Country::Canada), b.phone_number(Country::Canada));
        }
    }

    #[test]
    fn companies_are_nonempty_and_capitalized() {
        let mut faker = LocaleFaker::with_seed(7);
        for _ in 0..100 {
            let company = faker.company();
            assert!(company.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn us_addresses_are_single_line() {
        let mut faker = LocaleFaker::with_seed(7);
        for _ in 0..100 {
            let address = faker.address(Country::Usa);
            assert!(!address.contains('\n'));
            assert!(address.chars().next().unwrap().is_ascii_digit());
        }
    }

    #[test]
    fn mexican_addresses_carry_a_postal_code() {
        let mut faker = LocaleFaker::with_seed(7);
        for _ in 0..100 {
            assert!(faker.address(Country::Mexico).contains("C.P. "));
        }
    }

    #[test]
    fn nanp_phones_have_enough_digits() {
        let mut faker = LocaleFaker::with_seed(7);
        for _ in 0..100 {
            let phone = faker.phone_number(Country::Usa);
            let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
            assert!(digits >= 10, "{phone}");
        }
    }
}
