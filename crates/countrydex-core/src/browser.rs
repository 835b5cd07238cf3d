// crates/countrydex-core/src/browser.rs
//! A browsing session: one [`Catalog`] and one [`Paginator`] kept in step.
//!
//! The session produces plain view data ([`PageView`], [`CountryDetail`]);
//! turning that into HTML or terminal output is left to the front-end.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::display::{format_coordinates, format_population, join_or_placeholder, or_placeholder};
use crate::error::{CountryDexError, Result};
use crate::model::CountryRecord;
use crate::paginator::{PageLabel, Paginator};
use crate::traits::{CountrySource, WeatherSource};
use crate::weather::WeatherStatus;
use serde::Serialize;
use tracing::{debug, info, warn};

/// One grid card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryCard {
    pub id: String,
    pub name: String,
    pub flag_url: Option<String>,
    pub region: String,
    pub capital: String,
    pub population: String,
}

impl From<&CountryRecord> for CountryCard {
    fn from(r: &CountryRecord) -> Self {
        Self {
            id: r.id.clone(),
            name: r.common_name.clone(),
            flag_url: r.flag_url.clone(),
            region: or_placeholder(r.region()).to_string(),
            capital: or_placeholder(r.capital()).to_string(),
            population: format_population(r.population),
        }
    }
}

/// Everything needed to draw the current page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub cards: Vec<CountryCard>,
    pub labels: Vec<PageLabel>,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub summary: String,
}

/// The detail view opened from a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryDetail {
    pub card: CountryCard,
    pub official_name: String,
    pub native_name: String,
    pub currency: String,
    pub subregion: String,
    pub borders: String,
    pub coordinates: String,
    /// `None` until a weather lookup was attempted.
    pub weather: Option<WeatherStatus>,
}

impl From<&CountryRecord> for CountryDetail {
    fn from(r: &CountryRecord) -> Self {
        Self {
            card: CountryCard::from(r),
            official_name: r.official_name.clone(),
            native_name: or_placeholder(r.native_name.as_deref()).to_string(),
            currency: or_placeholder(r.currency_symbol.as_deref()).to_string(),
            subregion: or_placeholder(r.subregion.as_deref()).to_string(),
            borders: join_or_placeholder(&r.borders),
            coordinates: format_coordinates(r.latitude, r.longitude),
            weather: None,
        }
    }
}

impl CountryDetail {
    /// Detail view for a record plus a weather lookup.
    ///
    /// Records without coordinates never reach the weather source; any
    /// weather failure is folded into [`WeatherStatus::Unavailable`] so the
    /// rest of the view still renders.
    pub fn with_weather(record: &CountryRecord, weather: &dyn WeatherSource) -> Self {
        let mut detail = CountryDetail::from(record);
        let status = match record.coordinates() {
            Some(at) => {
                debug!(id = %record.id, "looking up weather");
                let status = WeatherStatus::from(weather.current_weather(at));
                if let WeatherStatus::Unavailable { reason } = &status {
                    warn!(id = %record.id, %reason, "weather unavailable");
                }
                status
            }
            None => WeatherStatus::unavailable("no coordinates"),
        };
        detail.weather = Some(status);
        detail
    }
}

#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Catalog,
    paginator: Paginator,
}

impl Browser {
    /// An empty session; fails only on a zero page size.
    pub fn new(page_size: usize) -> Result<Self> {
        Ok(Self {
            catalog: Catalog::new(),
            paginator: Paginator::new(page_size)?,
        })
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(config.page_size)
    }

    /// Replace the catalog and go back to page 1.
    pub fn load(&mut self, records: Vec<CountryRecord>) {
        self.catalog.load(records);
        self.paginator.reset(self.catalog.filtered_len());
    }

    /// Load from a source. On failure the current contents stay untouched.
    pub fn load_from(&mut self, source: &dyn CountrySource) -> Result<usize> {
        let records = source.fetch_countries().map_err(|e| match e {
            CountryDexError::DataSource(_) => e,
            other => CountryDexError::DataSource(other.to_string()),
        })?;
        self.load(records);
        info!(countries = self.catalog.len(), "countries loaded");
        Ok(self.catalog.len())
    }

    /// Apply a search term, reset to page 1 and return the match count.
    pub fn search(&mut self, term: &str) -> usize {
        let matches = self.catalog.set_filter(term);
        self.paginator.reset(matches);
        matches
    }

    pub fn go_to(&mut self, page: usize) -> Result<()> {
        self.paginator.go_to(page, self.catalog.filtered_len())
    }

    pub fn next(&mut self) -> Result<()> {
        self.paginator.next(self.catalog.filtered_len())
    }

    pub fn previous(&mut self) -> Result<()> {
        self.paginator.previous(self.catalog.filtered_len())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Records on the current page.
    pub fn visible(&self) -> Vec<&CountryRecord> {
        let (start, end) = self.paginator.bounds(self.catalog.filtered_len());
        self.catalog.filtered_range(start, end)
    }

    pub fn page(&self) -> PageView {
        PageView {
            cards: self.visible().into_iter().map(CountryCard::from).collect(),
            labels: self.paginator.page_labels(),
            current_page: self.paginator.current_page(),
            total_pages: self.paginator.total_pages(),
            has_previous: self.paginator.has_previous(),
            has_next: self.paginator.has_next(),
            summary: self.paginator.summary(),
        }
    }

    /// Detail view without weather.
    pub fn detail(&self, id: &str) -> Option<CountryDetail> {
        self.catalog.find(id).map(CountryDetail::from)
    }

    /// Detail view plus a weather lookup; see [`CountryDetail::with_weather`].
    pub fn detail_with_weather(
        &self,
        id: &str,
        weather: &dyn WeatherSource,
    ) -> Result<CountryDetail> {
        let record = self
            .catalog
            .find(id)
            .ok_or_else(|| CountryDexError::NotFound(format!("no country with code {id}")))?;
        Ok(CountryDetail::with_weather(record, weather))
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self {
            catalog: Catalog::new(),
            paginator: Paginator::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinates;
    use crate::weather::{WeatherCondition, WeatherReport};
    use std::cell::Cell;

    struct FixedWeather {
        calls: Cell<usize>,
        fail: bool,
    }

    impl WeatherSource for FixedWeather {
        fn current_weather(&self, _at: Coordinates) -> Result<WeatherReport> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(CountryDexError::WeatherUnavailable("HTTP 500".into()));
            }
            Ok(WeatherReport {
                temperature: 20.0,
                temperature_unit: "°C".into(),
                relative_humidity: 40.0,
                weather_code: 0,
                condition: WeatherCondition::ClearSky,
            })
        }
    }

    fn browser(n: usize) -> Browser {
        let mut b = Browser::new(4).unwrap();
        b.load(
            (0..n)
                .map(|i| CountryRecord::new(format!("C{i:02}"), format!("Country {i:02}")))
                .collect(),
        );
        b
    }

    #[test]
    fn search_resets_to_first_page() {
        let mut b = browser(10);
        b.go_to(3).unwrap();
        assert_eq!(b.search("country 0"), 10);
        assert_eq!(b.paginator().current_page(), 1);
        assert_eq!(b.search("country 1"), 0);
        let page = b.page();
        assert!(page.cards.is_empty());
        assert!(page.labels.is_empty());
        assert!(!page.has_previous && !page.has_next);
    }

    #[test]
    fn page_view_reflects_position() {
        let mut b = browser(10);
        b.next().unwrap();
        let page = b.page();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.cards.len(), 4);
        assert_eq!(page.cards[0].id, "C04");
        assert!(page.has_previous && page.has_next);
        assert_eq!(page.summary, "Showing 5-8 of 10");
    }

    #[test]
    fn card_uses_placeholders() {
        let card = CountryCard::from(&CountryRecord::new("ATA", "Antarctica"));
        assert_eq!(card.population, "N/A");
        assert_eq!(card.capital, "N/A");
        assert_eq!(card.region, "N/A");
    }

    #[test]
    fn no_coordinates_skips_weather_lookup() {
        let b = browser(2);
        let weather = FixedWeather {
            calls: Cell::new(0),
            fail: false,
        };
        let detail = b.detail_with_weather("c00", &weather).unwrap();
        assert_eq!(weather.calls.get(), 0);
        assert_eq!(detail.weather, Some(WeatherStatus::unavailable("no coordinates")));
    }

    #[test]
    fn weather_failure_keeps_the_detail() {
        let mut record = CountryRecord::new("NOR", "Norway");
        record.latitude = Some(62.0);
        record.longitude = Some(10.0);
        let mut b = Browser::new(16).unwrap();
        b.load(vec![record]);

        let failing = FixedWeather {
            calls: Cell::new(0),
            fail: true,
        };
        let detail = b.detail_with_weather("NOR", &failing).unwrap();
        assert_eq!(failing.calls.get(), 1);
        assert_eq!(detail.card.name, "Norway");
        assert_eq!(detail.weather, Some(WeatherStatus::unavailable("HTTP 500")));

        let working = FixedWeather {
            calls: Cell::new(0),
            fail: false,
        };
        let detail = b.detail_with_weather("NOR", &working).unwrap();
        let report = detail.weather.as_ref().and_then(|w| w.report()).unwrap();
        assert_eq!(report.condition, WeatherCondition::ClearSky);
    }

    #[test]
    fn detail_from_a_detached_record() {
        let mut record = CountryRecord::new("NOR", "Norway");
        record.latitude = Some(62.0);
        record.longitude = Some(10.0);
        let weather = FixedWeather {
            calls: Cell::new(0),
            fail: false,
        };
        let detail = CountryDetail::with_weather(&record, &weather);
        assert_eq!(weather.calls.get(), 1);
        assert_eq!(detail.coordinates, "62.00, 10.00");
        assert!(detail.weather.as_ref().and_then(|w| w.report()).is_some());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let b = browser(1);
        let weather = FixedWeather {
            calls: Cell::new(0),
            fail: false,
        };
        assert!(matches!(
            b.detail_with_weather("ZZZ", &weather),
            Err(CountryDexError::NotFound(_))
        ));
        assert!(b.detail("ZZZ").is_none());
    }
}
