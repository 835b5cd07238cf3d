//! countrydex-wasm: WebAssembly bindings for countrydex-core
//!
//! The page owns the network and the DOM; this crate owns the state. The page
//! fetches the REST Countries list and hands the text to
//! [`CountryBrowser::load_json`], then asks for plain view objects to render.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CountryBrowser, countries_url } from 'countrydex-wasm';
//!
//! await init();
//! const browser = new CountryBrowser(16);
//! browser.load_json(await (await fetch(countries_url())).text());
//!
//! const view = browser.page();   // { cards, labels, summary, has_next, ... }
//! browser.search('land');        // call from a debounced input handler
//! browser.next();                // false when there is no next page
//!
//! const url = browser.weather_url('NOR');  // undefined without coordinates
//! const text = url ? await (await fetch(url)).text() : '';
//! const detail = browser.detail_with_weather('NOR', text);
//! ```
//!
//! Notes
//! -----
//! - Page labels serialize as `{ kind: "page", page: 3 }` or `{ kind: "ellipsis" }`.
//! - Missing values are already rendered as `"N/A"`.
use countrydex_core::raw::parse_countries;
use countrydex_core::traits::WeatherSource;
use countrydex_core::weather::parse_weather;
use countrydex_core::{
    Browser, Config, Coordinates, Result as CoreResult, WeatherCondition, WeatherReport, WeatherStatus,
};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing countrydex WASM module...".into());
}

fn js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// Weather text the page already fetched; parsing happens in Rust.
struct FetchedWeather<'a>(&'a str);

impl WeatherSource for FetchedWeather<'_> {
    fn current_weather(&self, _at: Coordinates) -> CoreResult<WeatherReport> {
        parse_weather(self.0)
    }
}

/* --------------------------------------------------------------------------
   Session
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct CountryBrowser {
    inner: Browser,
    config: Config,
}

#[wasm_bindgen]
impl CountryBrowser {
    #[wasm_bindgen(constructor)]
    pub fn new(page_size: usize) -> Result<CountryBrowser, JsError> {
        let config = Config::default().with_page_size(page_size).map_err(js_error)?;
        let inner = Browser::with_config(&config).map_err(js_error)?;
        Ok(CountryBrowser { inner, config })
    }

    /// Load a REST Countries JSON array; returns the record count.
    pub fn load_json(&mut self, json: &str) -> Result<usize, JsError> {
        let records = parse_countries(json).map_err(js_error)?;
        self.inner.load(records);
        web_sys::console::log_1(
            &format!("✓ Loaded {} countries", self.inner.catalog().len()).into(),
        );
        Ok(self.inner.catalog().len())
    }

    /// Apply a search term and go back to page 1; returns the match count.
    pub fn search(&mut self, term: &str) -> usize {
        self.inner.search(term)
    }

    /// `false` (and no change) for pages outside `1..=total_pages`.
    pub fn go_to(&mut self, page: usize) -> bool {
        self.inner.go_to(page).is_ok()
    }

    pub fn next(&mut self) -> bool {
        self.inner.next().is_ok()
    }

    pub fn previous(&mut self) -> bool {
        self.inner.previous().is_ok()
    }

    pub fn current_page(&self) -> usize {
        self.inner.paginator().current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.inner.paginator().total_pages()
    }

    pub fn country_count(&self) -> usize {
        self.inner.catalog().len()
    }

    pub fn match_count(&self) -> usize {
        self.inner.catalog().filtered_len()
    }

    pub fn summary(&self) -> String {
        self.inner.paginator().summary()
    }

    /// The current page as `{ cards, labels, current_page, total_pages, has_previous, has_next, summary }`.
    pub fn page(&self) -> Result<JsValue, JsError> {
        to_value(&self.inner.page()).map_err(js_error)
    }

    /// Detail view without weather, or `undefined` for an unknown code.
    pub fn detail(&self, id: &str) -> Result<JsValue, JsError> {
        match self.inner.detail(id) {
            Some(d) => to_value(&d).map_err(js_error),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Open-Meteo URL for a country, or `undefined` when it has no coordinates.
    pub fn weather_url(&self, id: &str) -> Option<String> {
        let record = self.inner.catalog().find(id)?;
        record
            .coordinates()
            .map(|at| self.config.weather_request_url(at))
    }

    /// Detail view with weather parsed from the fetched forecast text.
    ///
    /// Pass an empty string when the fetch failed; the weather part then
    /// reads "unavailable" and the rest of the view is unaffected.
    pub fn detail_with_weather(&self, id: &str, weather_json: &str) -> Result<JsValue, JsError> {
        let detail = self
            .inner
            .detail_with_weather(id, &FetchedWeather(weather_json))
            .map_err(js_error)?;
        to_value(&detail).map_err(js_error)
    }
}

/* --------------------------------------------------------------------------
   Free helpers
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn countries_url() -> String {
    Config::default().countries_url
}

/// Parse Open-Meteo forecast text into `{ status: "available", report }` or
/// `{ status: "unavailable", reason }`. Never throws on bad input.
#[wasm_bindgen]
pub fn weather_from_json(text: &str) -> Result<JsValue, JsError> {
    to_value(&WeatherStatus::from(parse_weather(text))).map_err(js_error)
}

/// Text for a WMO weather code, e.g. `61` -> `"Rain"`.
#[wasm_bindgen]
pub fn weather_condition(code: i32) -> String {
    WeatherCondition::from_code(code as i64).label().to_string()
}
