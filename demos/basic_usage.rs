//! Basic usage example for countrydex
//!
//! This example demonstrates how to:
//! - Load countries from a local REST Countries file
//! - Search by name and page through the results
//! - Open a detail view

use countrydex_core::prelude::*;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("crates/countrydex-core/tests/data/countries.json")
}

fn main() -> Result<()> {
    println!("=== countrydex Basic Usage Example ===\n");

    // Load the catalog
    println!("Loading countries...");
    let mut browser = Browser::new(4)?;
    let count = browser.load_from(&FileSource::new(fixture()))?;
    println!("✓ Loaded {count} countries\n");

    // Example 1: First page
    println!("--- Example 1: First page ---");
    let page = browser.page();
    for card in &page.cards {
        println!("{} ({}) pop. {}", card.name, card.id, card.population);
    }
    println!("{}", page.summary);
    let labels: Vec<String> = page.labels.iter().map(ToString::to_string).collect();
    println!("Pages: {}\n", labels.join(" "));

    // Example 2: Walk every page
    println!("--- Example 2: Walk every page ---");
    while browser.next().is_ok() {
        println!("{}", browser.page().summary);
    }
    println!();

    // Example 3: Search
    println!("--- Example 3: Search for 'united' ---");
    let matches = browser.search("united");
    println!("{matches} matches:");
    for card in browser.page().cards {
        println!("- {}", card.name);
    }
    println!();

    // Example 4: Detail view
    println!("--- Example 4: Detail for NOR ---");
    if let Some(detail) = browser.detail("nor") {
        println!("{} ({})", detail.card.name, detail.official_name);
        println!("Native: {}", detail.native_name);
        println!("Currency: {}", detail.currency);
        println!("Borders: {}", detail.borders);
        println!("Coordinates: {}", detail.coordinates);
    }

    Ok(())
}
