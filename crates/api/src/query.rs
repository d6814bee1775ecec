//! Shared query parameter types for API handlers.

use campus_core::pagination::PageRequest;
use serde::Deserialize;

/// Query parameters of listings that can eager-load an association and
/// paginate (`?eagerload=true&page=0&size=20`).
#[derive(Debug, Default, Deserialize)]
pub struct EagerLoadParams {
    #[serde(default)]
    pub eagerload: bool,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl EagerLoadParams {
    /// The requested page, or `None` for an unpaginated listing.
    pub fn page_request(&self) -> Option<PageRequest> {
        if self.page.is_none() && self.size.is_none() {
            return None;
        }
        Some(PageRequest::new(self.page, self.size))
    }
}
