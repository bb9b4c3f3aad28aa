//! Country → currency lookup.

/// A selectable country and the currency it trades in.
#[derive(Debug, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, e.g. `"AU"`.
    pub code: &'static str,
    pub name: &'static str,
    /// ISO 4217 currency code, e.g. `"AUD"`.
    pub currency: &'static str,
}

const fn country(code: &'static str, name: &'static str, currency: &'static str) -> Country {
    Country {
        code,
        name,
        currency,
    }
}

pub static COUNTRIES: &[Country] = &[
    country("AU", "Australia", "AUD"),
    country("US", "United States", "USD"),
    country("GB", "United Kingdom", "GBP"),
    country("EU", "European Union", "EUR"),
    country("DE", "Germany", "EUR"),
    country("FR", "France", "EUR"),
    country("IT", "Italy", "EUR"),
    country("ES", "Spain", "EUR"),
    country("NL", "Netherlands", "EUR"),
    country("IE", "Ireland", "EUR"),
    country("NZ", "New Zealand", "NZD"),
    country("CA", "Canada", "CAD"),
    country("JP", "Japan", "JPY"),
    country("CN", "China", "CNY"),
    country("HK", "Hong Kong", "HKD"),
    country("SG", "Singapore", "SGD"),
    country("IN", "India", "INR"),
    country("ID", "Indonesia", "IDR"),
    country("MY", "Malaysia", "MYR"),
    country("PH", "Philippines", "PHP"),
    country("TH", "Thailand", "THB"),
    country("VN", "Vietnam", "VND"),
    country("KR", "South Korea", "KRW"),
    country("CH", "Switzerland", "CHF"),
    country("SE", "Sweden", "SEK"),
    country("NO", "Norway", "NOK"),
    country("DK", "Denmark", "DKK"),
    country("PL", "Poland", "PLN"),
    country("CZ", "Czech Republic", "CZK"),
    country("HU", "Hungary", "HUF"),
    country("IL", "Israel", "ILS"),
    country("AE", "United Arab Emirates", "AED"),
    country("SA", "Saudi Arabia", "SAR"),
    country("ZA", "South Africa", "ZAR"),
    country("MX", "Mexico", "MXN"),
    country("BR", "Brazil", "BRL"),
    country("TR", "Turkey", "TRY"),
];

/// Resolve a country by its two-letter code, or failing that by currency
/// code (first country using it). Case-insensitive.
pub fn find(query: &str) -> Option<&'static Country> {
    let query = query.trim();
    COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(query))
        .or_else(|| {
            COUNTRIES
                .iter()
                .find(|c| c.currency.eq_ignore_ascii_case(query))
        })
}
