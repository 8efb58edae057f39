//! Limit/offset pagination shared by list endpoints.

use serde::Deserialize;

use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Raw pagination query parameters.
///
/// Kept as plain optional fields so list endpoints can embed them next to
/// their filters without `#[serde(flatten)]`, which breaks numeric parsing
/// of query strings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl PaginationParams {
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self { limit, offset }
    }

    /// Normalize into a bounded page.
    pub fn page(&self) -> Page {
        self.page_with_default(DEFAULT_PAGE_SIZE)
    }

    /// Normalize into a bounded page, using `default_limit` when no limit was given.
    pub fn page_with_default(&self, default_limit: u64) -> Page {
        Page {
            limit: self.limit.unwrap_or(default_limit).clamp(1, MAX_PAGE_SIZE),
            offset: self.offset.unwrap_or(0),
        }
    }
}

/// A validated page window: `1 <= limit <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Default for Page {
    fn default() -> Self {
        PaginationParams::default().page()
    }
}
