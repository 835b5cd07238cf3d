// crates/countrydex-core/src/error.rs
use thiserror::Error;

/// Errors produced by the catalog, the paginator and the data sources.
///
/// Front-ends are expected to treat these differently:
/// [`CountryDexError::OutOfRange`] is ignored, [`CountryDexError::WeatherUnavailable`]
/// becomes a local placeholder in the detail view, and
/// [`CountryDexError::DataSource`] is terminal for the catalog load.
#[derive(Debug, Error)]
pub enum CountryDexError {
    /// The country list could not be fetched or decoded.
    #[error("failed to load countries: {0}")]
    DataSource(String),

    /// Weather could not be obtained for a detail view.
    #[error("weather unavailable: {0}")]
    WeatherUnavailable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A page request outside `1..=total_pages`.
    #[error("page {page} is out of range (1..={total_pages})")]
    OutOfRange { page: usize, total_pages: usize },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CountryDexError>;

impl CountryDexError {
    /// `true` for rejected page requests, which callers silently ignore.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, CountryDexError::OutOfRange { .. })
    }
}
