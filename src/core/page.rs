//! Pagination stage
//!
//! Pages are 1-based. A requested page outside `[1, total_pages]` is clamped
//! instead of rejected, so a filter that narrows the collection can never
//! strand a caller on an empty page. An empty collection has zero pages and
//! reports page 1.

use serde::{Deserialize, Serialize};

/// Selected page number and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageState {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of records per page
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl PageState {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// First page with the given size
    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    /// Clamp against a record count
    ///
    /// The page size becomes at least 1 and the page falls within
    /// `[1, max(1, total_pages)]`.
    pub fn clamped(self, total: usize) -> Self {
        let page_size = self.page_size.max(1);
        let last = total_pages(total, page_size).max(1);
        Self {
            page: self.page.clamp(1, last),
            page_size,
        }
    }

    /// Half-open index range of this page
    pub fn bounds(self) -> (usize, usize) {
        let start = self.page.saturating_sub(1).saturating_mul(self.page_size);
        (start, start.saturating_add(self.page_size))
    }
}

/// `ceil(total / page_size)`, zero for an empty collection
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Paginated response structure
///
/// This structure wraps one page of data with metadata about pagination
/// state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit is at least 1 to avoid division by zero
        let limit = limit.max(1);
        let total_pages = total_pages(total, limit);
        let page = page.max(1);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Slice rows into the requested page after clamping it
pub fn paginate<T>(rows: Vec<T>, state: PageState) -> PaginatedResponse<T> {
    let total = rows.len();
    let state = state.clamped(total);
    let (start, end) = state.bounds();

    let data = rows
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect();

    PaginatedResponse {
        data,
        pagination: PaginationMeta::new(state.page, state.page_size, total),
    }
}
