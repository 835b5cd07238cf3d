// crates/countrydex-core/src/catalog.rs
use crate::common::CatalogStats;
use crate::display::{or_placeholder, NOT_AVAILABLE};
use crate::model::CountryRecord;
use crate::text::{fold_key, normalize_term};
use crate::traits::NameMatch;
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory holder of every country record plus the current filter.
///
/// `all` is kept sorted by common name (case-insensitive, stable).
/// `filtered` is always an order-preserving subsequence of `all`.
/// The catalog knows nothing about paging: after [`Catalog::set_filter`]
/// the caller resets its paginator.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    all: Vec<CountryRecord>,
    filter_term: String,
    /// Indices into `all`.
    filtered: Vec<usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog directly from records.
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        let mut catalog = Self::new();
        catalog.load(records);
        catalog
    }

    /// Replace the catalog contents and clear the filter.
    pub fn load(&mut self, mut records: Vec<CountryRecord>) {
        // sort_by_cached_key is stable; equal keys keep input order.
        records.sort_by_cached_key(|r| fold_key(&r.common_name));
        self.all = records;
        self.filter_term.clear();
        self.filtered = (0..self.all.len()).collect();
        debug!(countries = self.all.len(), "catalog loaded");
    }

    /// Apply a search term and return the number of matching records.
    pub fn set_filter(&mut self, term: &str) -> usize {
        let term = normalize_term(term);
        self.filtered = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, r)| r.name_contains_normalized(&term))
            .map(|(i, _)| i)
            .collect();
        debug!(term = %term, matches = self.filtered.len(), "filter applied");
        self.filter_term = term;
        self.filtered.len()
    }

    /// Every record, sorted.
    pub fn all(&self) -> &[CountryRecord] {
        &self.all
    }

    /// The records matching the current filter, in catalog order.
    pub fn filtered(&self) -> Vec<&CountryRecord> {
        self.filtered.iter().map(|&i| &self.all[i]).collect()
    }

    /// Matching records in `range` of the filtered list, truncated to what exists.
    pub fn filtered_range(&self, start: usize, end: usize) -> Vec<&CountryRecord> {
        let end = end.min(self.filtered.len());
        let start = start.min(end);
        self.filtered[start..end]
            .iter()
            .map(|&i| &self.all[i])
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The normalized term currently applied ("" when unfiltered).
    pub fn filter_term(&self) -> &str {
        &self.filter_term
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Find a record by its 3-letter code, case-insensitive.
    ///
    /// Searches the whole catalog, not just the filtered view.
    pub fn find(&self, id: &str) -> Option<&CountryRecord> {
        let id = id.trim();
        self.all.iter().find(|r| r.id.eq_ignore_ascii_case(id))
    }

    pub fn stats(&self) -> CatalogStats {
        let mut regions: BTreeMap<String, usize> = BTreeMap::new();
        for r in &self.all {
            let region = or_placeholder(r.region()).to_string();
            *regions.entry(region).or_default() += 1;
        }
        // Keep the placeholder bucket last.
        let mut regions: Vec<(String, usize)> = regions.into_iter().collect();
        regions.sort_by_key(|(name, _)| name == NOT_AVAILABLE);

        CatalogStats {
            countries: self.all.len(),
            filtered: self.filtered.len(),
            regions,
        }
    }
}
