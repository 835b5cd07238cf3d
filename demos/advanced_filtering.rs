//! Advanced filtering example for countrydex
//!
//! This example combines the name filter with ad-hoc predicates over the
//! catalog and a debounced search.

use countrydex_core::prelude::*;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== countrydex Advanced Filtering Example ===\n");

    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("crates/countrydex-core/tests/data/countries.json");
    let mut catalog = Catalog::from_records(FileSource::new(path).fetch_countries()?);

    // Example 1: Countries in Europe using the Euro
    println!("--- Example 1: Countries in Europe using € ---");
    let euro: Vec<_> = catalog
        .all()
        .iter()
        .filter(|c| c.region() == Some("Europe") && c.currency_symbol.as_deref() == Some("€"))
        .collect();
    for country in &euro {
        println!("- {} ({})", country.name(), country.id());
    }
    println!();

    // Example 2: Name filter, then a second predicate over the result
    println!("--- Example 2: 'land' with more than 1M people ---");
    catalog.set_filter("land");
    for country in catalog
        .filtered()
        .into_iter()
        .filter(|c| c.population().unwrap_or(0) > 1_000_000)
    {
        println!("- {} ({})", country.name(), format_population(country.population()));
    }
    println!();

    // Example 3: Region statistics
    println!("--- Example 3: Countries per region ---");
    for (region, count) in catalog.stats().regions {
        println!("{region:<10} {count}");
    }
    println!();

    // Example 4: Debounced typing, only the last term is applied
    println!("--- Example 4: Debounced search ---");
    let (tx, rx) = mpsc::channel();
    let search = Debouncer::new(Duration::from_millis(100), move |term: String| {
        tx.send(term).ok();
    });
    for partial in ["u", "un", "uni", "unit"] {
        search.call(partial.to_string());
    }
    if let Ok(term) = rx.recv_timeout(Duration::from_secs(2)) {
        let n = catalog.set_filter(&term);
        println!("applied {term:?}: {n} matches");
    }

    Ok(())
}
