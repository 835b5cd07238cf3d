// crates/countrydex-core/src/loader/http.rs
#![cfg(feature = "fetch")]

use crate::config::Config;
use crate::error::{CountryDexError, Result};
use crate::model::{Coordinates, CountryRecord};
use crate::raw::parse_countries;
use crate::traits::{CountrySource, WeatherSource};
use crate::weather::{parse_weather, WeatherReport};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("countrydex/", env!("CARGO_PKG_VERSION"));

// One connection pool per process.
static SHARED_CLIENT: OnceCell<Client> = OnceCell::new();

fn shared_client() -> Result<Client> {
    SHARED_CLIENT
        .get_or_try_init(|| Client::builder().user_agent(USER_AGENT).build())
        .cloned()
        .map_err(CountryDexError::from)
}

/// Blocking HTTP source for the country list and current weather.
///
/// No retries and no timeouts: a failed call surfaces once to the caller.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: Config,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: shared_client()?,
            config: config.clone(),
        })
    }

    fn get_text(&self, request: reqwest::blocking::RequestBuilder) -> std::result::Result<String, String> {
        let response = request.send().map_err(|e| e.to_string())?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {status}"));
        }
        response.text().map_err(|e| e.to_string())
    }
}

impl CountrySource for HttpClient {
    fn fetch_countries(&self) -> Result<Vec<CountryRecord>> {
        debug!(url = %self.config.countries_url, "fetching countries");
        let body = self
            .get_text(self.client.get(&self.config.countries_url))
            .map_err(CountryDexError::DataSource)?;
        parse_countries(&body).map_err(|e| CountryDexError::DataSource(e.to_string()))
    }
}

impl WeatherSource for HttpClient {
    fn current_weather(&self, at: Coordinates) -> Result<WeatherReport> {
        debug!(lat = at.latitude, lng = at.longitude, "fetching weather");
        let request = self.client.get(self.config.weather_request_url(at));
        let body = self.get_text(request).map_err(|reason| {
            warn!(%reason, "weather request failed");
            CountryDexError::WeatherUnavailable(reason)
        })?;
        parse_weather(&body)
    }
}
