#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use countrydex_core::{WeatherCondition, WeatherStatus};
use countrydex_wasm::{weather_condition, weather_from_json, CountryBrowser};

const SAMPLE: &str = r#"[
    { "name": { "common": "Norway" }, "cca3": "NOR", "latlng": [62.0, 10.0] },
    { "name": { "common": "Austria" }, "cca3": "AUT" },
    { "name": { "common": "Peru" }, "cca3": "PER", "population": 32971846 }
]"#;

#[wasm_bindgen_test]
fn loads_and_pages() {
    countrydex_wasm::start();

    let mut browser = CountryBrowser::new(2).unwrap();
    assert_eq!(browser.load_json(SAMPLE).unwrap(), 3);
    assert_eq!(browser.total_pages(), 2);
    assert!(browser.next());
    assert!(!browser.next());
    assert_eq!(browser.current_page(), 2);
    assert_eq!(browser.summary(), "Showing 3-3 of 3");
}

#[wasm_bindgen_test]
fn search_resets_and_rejects_bad_pages() {
    let mut browser = CountryBrowser::new(2).unwrap();
    browser.load_json(SAMPLE).unwrap();
    browser.next();
    assert_eq!(browser.search("A"), 2);
    assert_eq!(browser.current_page(), 1);
    assert!(!browser.go_to(0));
    assert!(!browser.go_to(2));
}

#[wasm_bindgen_test]
fn weather_url_only_with_coordinates() {
    let mut browser = CountryBrowser::new(16).unwrap();
    browser.load_json(SAMPLE).unwrap();
    assert!(browser.weather_url("nor").unwrap().contains("latitude=62"));
    assert!(browser.weather_url("AUT").is_none());
}

#[wasm_bindgen_test]
fn weather_codes() {
    assert_eq!(weather_condition(0), "Clear Sky");
    assert_eq!(weather_condition(96), "Thunderstorm");
    assert_eq!(weather_condition(30), "Variable");
}

#[wasm_bindgen_test]
fn weather_from_forecast_text() {
    let json = r#"{
        "current_units": { "temperature_2m": "°C" },
        "current": { "temperature_2m": 12.4, "relative_humidity_2m": 81, "weather_code": 61 }
    }"#;
    let status: WeatherStatus = serde_wasm_bindgen::from_value(weather_from_json(json).unwrap()).unwrap();
    let report = status.report().unwrap();
    assert_eq!(report.condition, WeatherCondition::Rain);
    assert_eq!(report.temperature, 12.4);

    let status: WeatherStatus =
        serde_wasm_bindgen::from_value(weather_from_json("not json").unwrap()).unwrap();
    assert!(status.report().is_none());
}
