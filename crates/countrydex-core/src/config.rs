// crates/countrydex-core/src/config.rs
use crate::error::{CountryDexError, Result};
use crate::model::Coordinates;
use crate::paginator::DEFAULT_PAGE_SIZE;
use std::time::Duration;

/// REST Countries endpoint with the field list the browser needs.
pub const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name,flags,region,subregion,capital,population,currencies,latlng,borders,cca3";

/// Open-Meteo forecast endpoint; coordinates are appended per request.
pub const WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Runtime configuration for a browser session.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub countries_url: String,
    pub weather_url: String,
    pub page_size: usize,
    /// Delay before a typed search term is applied.
    pub debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            countries_url: COUNTRIES_URL.to_string(),
            weather_url: WEATHER_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl Config {
    /// Defaults overridden by `COUNTRYDEX_*` environment variables.
    ///
    /// - `COUNTRYDEX_COUNTRIES_URL`
    /// - `COUNTRYDEX_WEATHER_URL`
    /// - `COUNTRYDEX_PAGE_SIZE`
    /// - `COUNTRYDEX_DEBOUNCE_MS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("COUNTRYDEX_COUNTRIES_URL") {
            config.countries_url = url;
        }
        if let Some(url) = lookup("COUNTRYDEX_WEATHER_URL") {
            config.weather_url = url;
        }
        if let Some(raw) = lookup("COUNTRYDEX_PAGE_SIZE") {
            config.page_size = raw.trim().parse().map_err(|_| {
                CountryDexError::InvalidConfig(format!("COUNTRYDEX_PAGE_SIZE: {raw:?} is not a number"))
            })?;
        }
        if let Some(raw) = lookup("COUNTRYDEX_DEBOUNCE_MS") {
            let ms: u64 = raw.trim().parse().map_err(|_| {
                CountryDexError::InvalidConfig(format!("COUNTRYDEX_DEBOUNCE_MS: {raw:?} is not a number"))
            })?;
            config.debounce = Duration::from_millis(ms);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Result<Self> {
        self.page_size = page_size;
        self.validate()?;
        Ok(self)
    }

    /// Full weather request URL for a coordinate pair.
    pub fn weather_request_url(&self, at: Coordinates) -> String {
        format!(
            "{}?latitude={}&longitude={}&current=temperature_2m,relative_humidity_2m,weather_code&timezone=auto",
            self.weather_url, at.latitude, at.longitude
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CountryDexError::InvalidConfig(
                "page size must be a positive integer".into(),
            ));
        }
        Ok(())
    }
}
