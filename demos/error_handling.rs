//! Error handling example for countrydex
//!
//! This example demonstrates how each error kind is meant to be handled.

use countrydex_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydex Error Handling Example ===\n");

    // Example 1: A failed load is terminal and reported once
    println!("--- Example 1: Loading from a missing file ---");
    let mut browser = Browser::new(16)?;
    match browser.load_from(&FileSource::new("does-not-exist.json")) {
        Ok(n) => println!("✓ Loaded {n} countries"),
        Err(e) => eprintln!("✗ Error loading data: {e}"),
    }
    println!();

    // Example 2: Invalid configuration
    println!("--- Example 2: Zero page size ---");
    match Paginator::new(0) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  {e}"),
    }
    println!();

    // Example 3: Out-of-range pages are ignored
    println!("--- Example 3: Out-of-range page requests ---");
    browser.load(vec![
        CountryRecord::new("FRA", "France"),
        CountryRecord::new("DEU", "Germany"),
    ]);
    for page in [0, 1, 2] {
        match browser.go_to(page) {
            Ok(()) => println!("  page {page}: ok"),
            Err(e) if e.is_out_of_range() => println!("  page {page}: ignored ({e})"),
            Err(e) => return Err(e),
        }
    }
    println!("  still on page {}", browser.paginator().current_page());
    println!();

    // Example 4: Weather failures stay local to the detail view
    println!("--- Example 4: Weather unavailable ---");
    let bad = parse_weather(r#"{ "error": true }"#);
    let status = WeatherStatus::from(bad);
    println!("  {status:?}");

    // Example 5: Missing fields render as a placeholder
    println!("--- Example 5: Missing population ---");
    if let Some(detail) = browser.detail("FRA") {
        println!("  Population: {}", detail.card.population);
    }

    Ok(())
}
