// crates/countrydex-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, gzip, HTTP) and hands parsed
//! [`CountryRecord`]s to the catalog.

use crate::error::{CountryDexError, Result};
use crate::model::CountryRecord;
use crate::raw::{into_records, CountriesRaw};
use crate::traits::CountrySource;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod common_io;
mod snapshot;

#[cfg(feature = "fetch")]
mod http;

#[cfg(feature = "fetch")]
pub use http::HttpClient;
pub use snapshot::{load_snapshot, save_snapshot, SNAPSHOT_VERSION};

/// Country list read from a local REST Countries JSON file (`.json` or `.json.gz`).
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CountrySource for FileSource {
    fn fetch_countries(&self) -> Result<Vec<CountryRecord>> {
        let reader = common_io::open_stream(&self.path)?;
        let raw: CountriesRaw = serde_json::from_reader(reader).map_err(|e| {
            CountryDexError::DataSource(format!("{}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), countries = raw.len(), "read country file");
        Ok(into_records(raw))
    }
}

/// Country list read from a snapshot written by [`save_snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CountrySource for SnapshotSource {
    fn fetch_countries(&self) -> Result<Vec<CountryRecord>> {
        load_snapshot(&self.path)
    }
}

/// Pick a file-backed source from the path: `*.bin` / `*.bin.gz` are
/// snapshots, everything else is REST Countries JSON.
pub fn source_for_path(path: impl Into<PathBuf>) -> Box<dyn CountrySource> {
    let path = path.into();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if name.ends_with(".bin") || name.ends_with(".bin.gz") {
        Box::new(SnapshotSource::new(path))
    } else {
        Box::new(FileSource::new(path))
    }
}
