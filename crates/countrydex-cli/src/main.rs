//! countrydex: terminal country browser
//!
//! Fetches the REST Countries list (or reads a local file), keeps it sorted
//! by name and lets you search, page through cards and open a detail view
//! with the current weather at the country's coordinates.
//!
//! Usage examples
//! --------------
//!
//! - Show catalog stats
//!   $ countrydex stats
//!
//! - First page, or page 3 of a search
//!   $ countrydex list
//!   $ countrydex list --search land --page 3
//!
//! - Details for a country by 3-letter code (case-insensitive)
//!   $ countrydex show nor
//!
//! - Work offline from a snapshot
//!   $ countrydex snapshot countries.bin.gz
//!   $ countrydex --input countries.bin.gz browse
mod args;
mod browse;
mod render;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use countrydex_core::loader::{save_snapshot, source_for_path};
use countrydex_core::traits::{CountrySource, WeatherSource};
use countrydex_core::{Browser, Config, CountryDexError};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "fetch")]
use countrydex_core::loader::HttpClient;

/// Fill the session; a failure is reported once, by `main`'s error return.
fn load(browser: &mut Browser, source: &dyn CountrySource) -> anyhow::Result<usize> {
    browser.load_from(source).context("Error loading data")
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "fetch")]
fn network(config: &Config) -> anyhow::Result<Option<HttpClient>> {
    Ok(Some(HttpClient::new(config)?))
}

/// Stand-in for the HTTP client in builds without `fetch`; never constructed.
#[cfg(not(feature = "fetch"))]
#[derive(Clone)]
enum Offline {}

#[cfg(not(feature = "fetch"))]
impl CountrySource for Offline {
    fn fetch_countries(&self) -> countrydex_core::Result<Vec<countrydex_core::CountryRecord>> {
        match *self {}
    }
}

#[cfg(not(feature = "fetch"))]
impl WeatherSource for Offline {
    fn current_weather(
        &self,
        _at: countrydex_core::Coordinates,
    ) -> countrydex_core::Result<countrydex_core::WeatherReport> {
        match *self {}
    }
}

#[cfg(not(feature = "fetch"))]
fn network(_config: &Config) -> anyhow::Result<Option<Offline>> {
    Ok(None)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = CliArgs::parse();

    let mut config = Config::from_env().context("reading COUNTRYDEX_* environment")?;
    if let Some(page_size) = args.page_size {
        config = config.with_page_size(page_size)?;
    }
    info!(?config, "configuration loaded");

    let http = network(&config)?;
    let weather: Option<&dyn WeatherSource> = http.as_ref().map(|h| h as &dyn WeatherSource);

    let source: Box<dyn CountrySource> = match (&args.input, http.clone()) {
        (Some(path), _) => source_for_path(path),
        (None, Some(client)) => Box::new(client),
        (None, None) => bail!("no --input given and this build cannot fetch over HTTP"),
    };

    let mut browser = Browser::with_config(&config)?;
    load(&mut browser, source.as_ref())?;

    match args.command {
        Commands::Stats => {
            render::stats(&mut io::stdout().lock(), &browser.catalog().stats())?;
        }

        Commands::List { page, search } => {
            if let Some(term) = search {
                browser.search(&term);
            }
            match browser.go_to(page) {
                Ok(()) => {}
                Err(CountryDexError::OutOfRange { total_pages, .. }) => {
                    eprintln!("Page {page} does not exist (1..={total_pages}), showing page 1");
                }
                Err(e) => return Err(e.into()),
            }
            render::page(&mut io::stdout().lock(), &browser.page())?;
        }

        Commands::Show { code, no_weather } => {
            let detail = match weather {
                Some(source) if !no_weather => Some(browser.detail_with_weather(&code, source)?),
                _ => browser.detail(&code),
            };
            match detail {
                Some(d) => render::detail(&mut io::stdout().lock(), &d)?,
                None => eprintln!("No country found for: {code}"),
            }
        }

        Commands::Browse => {
            browse::run(browser, weather, config.debounce)?;
        }

        Commands::Snapshot { out } => {
            save_snapshot(&out, browser.catalog().all())
                .with_context(|| format!("writing snapshot to {out}"))?;
            println!("Saved {} countries to {out}", browser.catalog().len());
        }
    }

    Ok(())
}
