use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the catalog.
///
/// Returned by [`Catalog::stats`](crate::Catalog::stats); `filtered`
/// reflects the current filter term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub countries: usize,
    pub filtered: usize,
    /// `(region, count)` sorted by region name; records without a region
    /// are counted under `"N/A"`, last.
    pub regions: Vec<(String, usize)>,
}
