//! Page requests and page results for paginated listings.
//!
//! A [`Page`] always carries the request it answers and the total number of
//! elements across all pages, so enrichment steps that rebuild the content
//! (see [`crate::eager::fetch_page`]) can keep the metadata untouched.

use serde::Serialize;

/// Default page size when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound on the page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a user-provided page size into `1..=max`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided page index to non-negative.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(0).max(0)
}

/// A zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    /// Build a request from raw query parameters, clamping both values.
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        Self {
            page: clamp_page(page),
            size: clamp_limit(size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    /// SQL `OFFSET` for this page.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }

    /// SQL `LIMIT` for this page.
    pub fn limit(&self) -> i64 {
        self.size
    }
}

/// One page of results plus the metadata describing where it sits.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub request: PageRequest,
    pub total_elements: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    /// Number of pages needed to hold `total_elements` at this page size.
    pub fn total_pages(&self) -> i64 {
        if self.request.size <= 0 {
            return 0;
        }
        (self.total_elements + self.request.size - 1) / self.request.size
    }

    pub fn is_last(&self) -> bool {
        self.request.page + 1 >= self.total_pages()
    }

    /// Replace the content, keeping the request and total count.
    pub fn with_content<U>(self, content: Vec<U>) -> Page<U> {
        Page {
            content,
            request: self.request,
            total_elements: self.total_elements,
        }
    }
}
