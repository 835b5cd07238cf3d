// crates/countrydex-core/src/traits.rs
use crate::error::Result;
use crate::model::{Coordinates, CountryRecord};
use crate::weather::WeatherReport;

/// Anything that can produce the full country list.
///
/// Implementations return records in source order; sorting is the
/// catalog's job.
///
/// # Examples
/// ```rust
/// use countrydex_core::traits::CountrySource;
/// use countrydex_core::{Catalog, CountryRecord, Result};
///
/// struct Fixed;
/// impl CountrySource for Fixed {
///     fn fetch_countries(&self) -> Result<Vec<CountryRecord>> {
///         Ok(vec![CountryRecord::new("NOR", "Norway"), CountryRecord::new("AUT", "Austria")])
///     }
/// }
///
/// let catalog = Catalog::from_records(Fixed.fetch_countries().unwrap());
/// assert_eq!(catalog.all()[0].name(), "Austria");
/// ```
pub trait CountrySource {
    /// Fetch every record. Failures are [`crate::CountryDexError::DataSource`].
    fn fetch_countries(&self) -> Result<Vec<CountryRecord>>;
}

/// Current weather lookup for a coordinate pair.
pub trait WeatherSource {
    /// Failures are [`crate::CountryDexError::WeatherUnavailable`].
    fn current_weather(&self, at: Coordinates) -> Result<WeatherReport>;
}

impl<T: CountrySource + ?Sized> CountrySource for &T {
    fn fetch_countries(&self) -> Result<Vec<CountryRecord>> {
        (**self).fetch_countries()
    }
}

impl<T: WeatherSource + ?Sized> WeatherSource for &T {
    fn current_weather(&self, at: Coordinates) -> Result<WeatherReport> {
        (**self).current_weather(at)
    }
}

/// Name-based matching for types that expose a display name.
///
/// ```rust
/// use countrydex_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("United Kingdom").name_contains("  KING "));
/// assert!(Place("Peru").name_contains(""));
/// ```
pub trait NameMatch {
    fn name_str(&self) -> &str;

    /// Case-insensitive substring match after trimming `q`.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_normalized(&crate::text::normalize_term(q))
    }

    /// Same as [`NameMatch::name_contains`] for a term already passed
    /// through [`crate::text::normalize_term`].
    #[inline]
    fn name_contains_normalized(&self, term: &str) -> bool {
        crate::text::contains_term(self.name_str(), term)
    }
}

impl NameMatch for CountryRecord {
    fn name_str(&self) -> &str {
        &self.common_name
    }
}
