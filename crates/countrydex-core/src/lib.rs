// crates/countrydex-core/src/lib.rs
//! countrydex-core
//! ===============
//!
//! A country catalog with case-insensitive name filtering, pagination with
//! compact page labels, and current-weather lookups for a detail view.
//!
//! ```rust
//! use countrydex_core::prelude::*;
//!
//! let mut browser = Browser::new(2).unwrap();
//! browser.load(vec![
//!     CountryRecord::new("FRA", "France"),
//!     CountryRecord::new("DEU", "Germany"),
//!     CountryRecord::new("AUT", "Austria"),
//! ]);
//! assert_eq!(browser.page().summary, "Showing 1-2 of 3");
//!
//! browser.search("an");
//! let names: Vec<_> = browser.page().cards.into_iter().map(|c| c.name).collect();
//! assert_eq!(names, vec!["France", "Germany"]);
//! ```

pub mod browser;
pub mod catalog;
pub mod common;
pub mod config;
pub mod debounce;
pub mod display;
pub mod error;
pub mod loader;
pub mod model;
pub mod paginator;
pub mod prelude;
pub mod text;
pub mod traits;
pub mod weather;
// Raw wire format of the country source.
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::browser::{Browser, CountryCard, CountryDetail, PageView};
pub use crate::catalog::Catalog;
pub use crate::common::CatalogStats;
pub use crate::config::Config;
pub use crate::error::{CountryDexError, Result};
pub use crate::model::{Coordinates, CountryRecord};
pub use crate::paginator::{PageLabel, Paginator};
pub use crate::weather::{WeatherCondition, WeatherReport, WeatherStatus};
