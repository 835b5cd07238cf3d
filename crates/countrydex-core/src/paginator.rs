// crates/countrydex-core/src/paginator.rs
use crate::error::{CountryDexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Page size used by the original browser grid.
pub const DEFAULT_PAGE_SIZE: usize = 16;

/// Up to this many pages every page number is shown.
pub const FULL_LABEL_LIMIT: usize = 7;

/// One entry of the page navigation strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLabel::Page(n) => write!(f, "{n}"),
            PageLabel::Ellipsis => f.write_str("…"),
        }
    }
}

/// Page window over a list of `item_count` items.
///
/// Invariant: `1 <= current_page <= total_pages`, and `total_pages >= 1`
/// even for an empty list. Requests outside that range are rejected with
/// [`CountryDexError::OutOfRange`] and leave the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
    total_pages: usize,
    item_count: usize,
}

impl Paginator {
    /// A paginator with a fixed page size; zero is rejected.
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(CountryDexError::InvalidConfig(
                "page size must be a positive integer".into(),
            ));
        }
        Ok(Self {
            page_size,
            current_page: 1,
            total_pages: 1,
            item_count: 0,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    fn pages_for(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size).max(1)
    }

    /// Back to page 1 for a (possibly new) item count.
    pub fn reset(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.total_pages = self.pages_for(item_count);
        self.current_page = 1;
    }

    /// Jump to `page`. Out-of-range requests fail and change nothing.
    pub fn go_to(&mut self, page: usize, item_count: usize) -> Result<()> {
        let total_pages = self.pages_for(item_count);
        if page < 1 || page > total_pages {
            debug!(page, total_pages, "page request rejected");
            return Err(CountryDexError::OutOfRange { page, total_pages });
        }
        self.item_count = item_count;
        self.total_pages = total_pages;
        self.current_page = page;
        Ok(())
    }

    pub fn next(&mut self, item_count: usize) -> Result<()> {
        self.go_to(self.current_page + 1, item_count)
    }

    pub fn previous(&mut self, item_count: usize) -> Result<()> {
        // page 0 is rejected by go_to
        self.go_to(self.current_page.saturating_sub(1), item_count)
    }

    /// Half-open index range of the current page, clipped to `len`.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (self.current_page * self.page_size).min(len);
        (start, end)
    }

    /// The items on the current page; shorter on the last page, never padded.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds(items.len());
        &items[start..end]
    }

    pub fn has_previous(&self) -> bool {
        self.item_count > 0 && self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.item_count > 0 && self.current_page < self.total_pages
    }

    /// Page numbers to show, with ellipses standing in for skipped runs.
    ///
    /// Page 1 and the last page are always present; around the current page
    /// a window of one neighbour on each side is shown. Any page hidden
    /// between 1 and the window, or between the window and the last page, is
    /// marked by a single ellipsis on that side.
    pub fn page_labels(&self) -> Vec<PageLabel> {
        if self.item_count == 0 {
            return Vec::new();
        }
        let total = self.total_pages;
        if total <= FULL_LABEL_LIMIT {
            return (1..=total).map(PageLabel::Page).collect();
        }

        let current = self.current_page;
        let start = current.saturating_sub(1).max(2);
        let end = (current + 1).min(total - 1);

        let mut labels = Vec::with_capacity(end - start + 5);
        labels.push(PageLabel::Page(1));
        if start > 2 {
            labels.push(PageLabel::Ellipsis);
        }
        labels.extend((start..=end).map(PageLabel::Page));
        if end < total - 1 {
            labels.push(PageLabel::Ellipsis);
        }
        labels.push(PageLabel::Page(total));
        labels
    }

    /// The result info line, e.g. `"Showing 17-32 of 250"`.
    pub fn summary(&self) -> String {
        if self.item_count == 0 {
            return "No results found".to_string();
        }
        let (start, end) = self.bounds(self.item_count);
        format!("Showing {}-{} of {}", start + 1, end, self.item_count)
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            total_pages: 1,
            item_count: 0,
        }
    }
}
