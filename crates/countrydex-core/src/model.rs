// crates/countrydex-core/src/model.rs
use serde::{Deserialize, Serialize};

/// Name used when a source record carries no common name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single country entry in the catalog.
///
/// Records are immutable once loaded. Optional fields stay `None` when the
/// source omitted them; rendering them is the job of [`crate::display`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Unique 3-letter code (e.g. "DEU").
    pub id: String,
    pub common_name: String,
    pub official_name: String,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub capital: Option<String>,
    pub population: Option<u64>,
    pub flag_url: Option<String>,
    pub native_name: Option<String>,
    pub currency_symbol: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// 3-letter codes of neighbouring countries.
    pub borders: Vec<String>,
}

impl CountryRecord {
    /// A record with only the identifying fields set.
    ///
    /// An empty `common_name` is replaced by [`UNKNOWN_NAME`].
    pub fn new(id: impl Into<String>, common_name: impl Into<String>) -> Self {
        let common_name = common_name.into();
        let common_name = if common_name.trim().is_empty() {
            UNKNOWN_NAME.to_string()
        } else {
            common_name
        };
        Self {
            id: id.into(),
            official_name: common_name.clone(),
            common_name,
            region: None,
            subregion: None,
            capital: None,
            population: None,
            flag_url: None,
            native_name: None,
            currency_symbol: None,
            latitude: None,
            longitude: None,
            borders: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.common_name
    }

    pub fn official_name(&self) -> &str {
        &self.official_name
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    pub fn population(&self) -> Option<u64> {
        self.population
    }

    pub fn borders(&self) -> &[String] {
        &self.borders
    }

    /// Both coordinates, or `None` if either is missing.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}
