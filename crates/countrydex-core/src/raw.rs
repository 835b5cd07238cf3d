// crates/countrydex-core/src/raw.rs
//! Raw REST Countries (v3.1) payload as it comes off the wire.
//!
//! Every field is optional or defaulted: a malformed entry must still turn
//! into a [`CountryRecord`], never into an error.

use crate::model::{CountryRecord, UNKNOWN_NAME};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Default, Deserialize)]
pub struct NameRaw {
    #[serde(default)]
    pub common: Option<String>,
    #[serde(default)]
    pub official: Option<String>,
    /// `{ "deu": { "official": "...", "common": "..." }, ... }`
    /// Source order is kept (serde_json `preserve_order`).
    #[serde(rename = "nativeName", default)]
    pub native_name: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

/// Raw country structure from JSON.
#[derive(Debug, Default, Deserialize)]
pub struct CountryRaw {
    #[serde(default)]
    pub name: NameRaw,
    #[serde(default)]
    pub flags: FlagsRaw,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: Option<u64>,
    /// `{ "EUR": { "name": "Euro", "symbol": "€" } }`
    #[serde(default)]
    pub currencies: Option<Map<String, Value>>,
    #[serde(default)]
    pub latlng: Option<Vec<f64>>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub cca3: Option<String>,
}

pub type CountriesRaw = Vec<CountryRaw>;

/// First entry of a keyed object, reading one string field from it.
fn first_entry_field(map: &Option<Map<String, Value>>, field: &str) -> Option<String> {
    map.as_ref()?
        .values()
        .next()?
        .get(field)?
        .as_str()
        .map(str::to_owned)
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

impl From<CountryRaw> for CountryRecord {
    fn from(raw: CountryRaw) -> Self {
        let common_name =
            non_empty(raw.name.common.clone()).unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let official_name = non_empty(raw.name.official.clone()).unwrap_or_else(|| common_name.clone());

        let (latitude, longitude) = match raw.latlng.as_deref() {
            Some([lat, lng, ..]) => (Some(*lat), Some(*lng)),
            _ => (None, None),
        };

        CountryRecord {
            id: raw.cca3.unwrap_or_default(),
            native_name: non_empty(first_entry_field(&raw.name.native_name, "common")),
            currency_symbol: non_empty(first_entry_field(&raw.currencies, "symbol")),
            common_name,
            official_name,
            region: non_empty(raw.region),
            subregion: non_empty(raw.subregion),
            capital: non_empty(raw.capital.and_then(|c| c.into_iter().next())),
            population: raw.population,
            flag_url: non_empty(raw.flags.png.or(raw.flags.svg)),
            latitude,
            longitude,
            borders: raw.borders.unwrap_or_default(),
        }
    }
}

/// Convert a raw payload into records, keeping source order.
pub fn into_records(raw: CountriesRaw) -> Vec<CountryRecord> {
    raw.into_iter().map(CountryRecord::from).collect()
}

/// Parse a REST Countries JSON array.
pub fn parse_countries(json: &str) -> crate::Result<Vec<CountryRecord>> {
    let raw: CountriesRaw = serde_json::from_str(json)?;
    Ok(into_records(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GERMANY: &str = r#"[{
        "name": {
            "common": "Germany",
            "official": "Federal Republic of Germany",
            "nativeName": { "deu": { "official": "Bundesrepublik Deutschland", "common": "Deutschland" } }
        },
        "flags": { "png": "https://flagcdn.com/w320/de.png" },
        "region": "Europe",
        "subregion": "Western Europe",
        "capital": ["Berlin"],
        "population": 83240525,
        "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
        "latlng": [51.0, 9.0],
        "borders": ["AUT", "BEL"],
        "cca3": "DEU"
    }]"#;

    #[test]
    fn maps_every_field() {
        let records = parse_countries(GERMANY).unwrap();
        let de = &records[0];
        assert_eq!(de.id, "DEU");
        assert_eq!(de.common_name, "Germany");
        assert_eq!(de.official_name, "Federal Republic of Germany");
        assert_eq!(de.native_name.as_deref(), Some("Deutschland"));
        assert_eq!(de.currency_symbol.as_deref(), Some("€"));
        assert_eq!(de.capital.as_deref(), Some("Berlin"));
        assert_eq!(de.population, Some(83_240_525));
        assert_eq!(de.latitude, Some(51.0));
        assert_eq!(de.longitude, Some(9.0));
        assert_eq!(de.borders, vec!["AUT", "BEL"]);
        assert_eq!(de.flag_url.as_deref(), Some("https://flagcdn.com/w320/de.png"));
    }

    #[test]
    fn native_name_uses_first_entry_in_source_order() {
        let json = r#"[{
            "name": {
                "common": "Switzerland",
                "nativeName": {
                    "gsw": { "common": "Schweiz" },
                    "fra": { "common": "Suisse" }
                }
            },
            "cca3": "CHE"
        }]"#;
        let records = parse_countries(json).unwrap();
        assert_eq!(records[0].native_name.as_deref(), Some("Schweiz"));
    }

    #[test]
    fn malformed_entry_is_defaulted() {
        let json = r#"[{ "latlng": [12.5], "capital": [] }]"#;
        let records = parse_countries(json).unwrap();
        let r = &records[0];
        assert_eq!(r.common_name, UNKNOWN_NAME);
        assert_eq!(r.official_name, UNKNOWN_NAME);
        assert!(r.borders.is_empty());
        assert_eq!(r.capital, None);
        assert_eq!(r.coordinates(), None);
        assert_eq!(r.population, None);
    }
}
