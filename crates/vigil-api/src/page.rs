// Paginated list envelope

use serde::{Deserialize, Serialize};

/// Generic paginated response as the backend serves list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
    pub pages: u64,
}

impl<T> Page<T> {
    /// Number of pages needed for `total` items at `size` per page.
    pub fn page_count(total: u64, size: u64) -> u64 {
        if size == 0 { 0 } else { total.div_ceil(size) }
    }

    /// An empty page for the given position.
    pub fn empty(page: u64, size: u64) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page,
            size,
            pages: 0,
        }
    }
}
