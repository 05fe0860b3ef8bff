//! Page — a bounded slice of a result set plus retrieval metadata.

use serde::{Deserialize, Serialize};

/// One page of results. Pages are **zero-indexed**.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page, at most `page_size` of them.
    pub items: Vec<T>,
    /// Zero-indexed page number this slice corresponds to.
    pub page: u32,
    /// Requested page size.
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    /// Total number of items across all pages.
    #[serde(rename = "totalItems")]
    pub total_items: u64,
    /// Total number of pages at this page size.
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Assemble a page from a slice of items and the overall total.
    ///
    /// # Panics
    ///
    /// Never panics; callers must reject `page_size == 0` before building
    /// a page (see the application service).
    #[must_use]
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(u64::from(page_size.max(1)));
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}
