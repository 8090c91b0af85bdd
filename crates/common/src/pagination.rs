//! Page requests for the dataset listing.
//!
//! `page_size` and `page_index` are exactly the arguments of sea-orm's
//! `paginate(db, page_size).fetch_page(page_index)`.

use serde::Deserialize;

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;

/// 1-based page request as it arrives from a query string. Missing keys take defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: DEFAULT_PER_PAGE } }
}

impl Pagination {
    pub fn new(page: u64, per_page: u64) -> Self { Self { page, per_page } }

    /// Page size for `paginate`, clamped to `1..=MAX_PER_PAGE`.
    pub fn page_size(&self) -> u64 { self.per_page.clamp(1, MAX_PER_PAGE) }

    /// Zero-based index for `fetch_page`. Page 0 is read as the first page.
    pub fn page_index(&self) -> u64 { self.page.saturating_sub(1) }

    /// Rows skipped before this page.
    pub fn offset(&self) -> u64 { self.page_index() * self.page_size() }
}
