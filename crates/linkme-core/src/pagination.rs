//! Pagination parameter for list operations.

use serde::{Deserialize, Serialize};

/// Bounds a list query to one page of results.
///
/// Repositories hand it to the DAO untouched; only the DAO turns it into
/// `LIMIT`/`OFFSET`. The page size always lies in `1..=MAX_SIZE`, including
/// values that arrive through deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPagination")]
pub struct Pagination {
    page: usize,
    size: usize,
}

#[derive(Deserialize)]
struct RawPagination {
    #[serde(default)]
    page: usize,
    #[serde(default = "default_size")]
    size: usize,
}

const fn default_size() -> usize {
    Pagination::DEFAULT_SIZE
}

impl From<RawPagination> for Pagination {
    fn from(raw: RawPagination) -> Self {
        Self::new(raw.page, raw.size)
    }
}

impl Pagination {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 20;
    /// The maximum allowed page size.
    pub const MAX_SIZE: usize = 100;

    /// Creates a new pagination, clamping `size` to `1..=MAX_SIZE`.
    #[must_use]
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }

    /// The first page with the default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }

    /// The page number (0-indexed).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// The number of items per page.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::first()
    }
}
