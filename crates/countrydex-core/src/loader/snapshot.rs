// crates/countrydex-core/src/loader/snapshot.rs
use super::common_io;
use crate::error::{CountryDexError, Result};
use crate::model::CountryRecord;
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Bumped whenever [`CountryRecord`]'s layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

// Guards against garbage input allocating without bound.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    records: Vec<CountryRecord>,
}

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

/// Write records as a bincode snapshot (gzip for `*.gz` paths).
pub fn save_snapshot(path: impl AsRef<Path>, records: &[CountryRecord]) -> Result<()> {
    let path = path.as_ref();
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        records: records.to_vec(),
    };
    let mut writer = common_io::create_stream(path)?;
    options().serialize_into(&mut writer, &snapshot)?;
    writer.flush()?;
    debug!(path = %path.display(), countries = records.len(), "snapshot written");
    Ok(())
}

/// Read a snapshot written by [`save_snapshot`].
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<CountryRecord>> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let snapshot: Snapshot = options().deserialize_from(reader)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(CountryDexError::DataSource(format!(
            "{}: snapshot version {} (expected {SNAPSHOT_VERSION})",
            path.display(),
            snapshot.version
        )));
    }
    Ok(snapshot.records)
}
