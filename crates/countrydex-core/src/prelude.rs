//! countrydex prelude: bring common types and traits into scope for demos.

pub use crate::browser::{Browser, CountryCard, CountryDetail, PageView};
pub use crate::catalog::Catalog;
pub use crate::config::Config;
pub use crate::debounce::Debouncer;
pub use crate::display::{format_population, or_placeholder, NOT_AVAILABLE};
pub use crate::error::{CountryDexError, Result};
#[cfg(feature = "fetch")]
pub use crate::loader::HttpClient;
pub use crate::loader::{load_snapshot, save_snapshot, source_for_path, FileSource};
pub use crate::model::{Coordinates, CountryRecord};
pub use crate::paginator::{PageLabel, Paginator};
pub use crate::traits::{CountrySource, NameMatch, WeatherSource};
pub use crate::weather::{parse_weather, WeatherCondition, WeatherReport, WeatherStatus};
