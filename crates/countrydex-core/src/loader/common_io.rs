// crates/countrydex-core/src/loader/common_io.rs
use crate::error::{CountryDexError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

pub fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and unwraps gzip for `*.gz` paths.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CountryDexError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip_path(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(CountryDexError::InvalidConfig(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Creates a file for writing, gzip-compressed for `*.gz` paths.
pub fn create_stream(path: &Path) -> Result<Box<dyn Write>> {
    let writer = BufWriter::new(File::create(path)?);

    if is_gzip_path(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzEncoder::new(writer, Compression::default())));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(CountryDexError::InvalidConfig(format!(
                "cannot write {}: gzip requested but 'compact' disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(writer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn gzip_detection_is_by_extension() {
        assert!(is_gzip_path(&PathBuf::from("countries.json.gz")));
        assert!(is_gzip_path(&PathBuf::from("SNAP.BIN.GZ")));
        assert!(!is_gzip_path(&PathBuf::from("countries.json")));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.json")).err().unwrap();
        assert!(matches!(err, CountryDexError::NotFound(_)));
    }
}
