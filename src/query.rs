//! List-query translation and page-result normalization.
//!
//! The backend speaks json-server list conventions: `q` for full-text
//! search, `_sort` / `_order` for ordering, `_page` (1-based) / `_limit`
//! for range pagination, and an `x-total-count` response header carrying
//! the total item count. This module converts between those conventions
//! and the SDK's abstract [`ListQuery`] / [`Page`] shapes, with no I/O of
//! its own.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Response header carrying the total item count across all pages.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (`asc` on the wire).
    #[default]
    Ascending,
    /// Descending order (`desc` on the wire).
    Descending,
}

impl SortDirection {
    /// Returns the literal wire value, `"asc"` or `"desc"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// An abstract list query over a resource collection.
///
/// `page` is zero-based internally and translated to the backend's 1-based
/// `_page` parameter by [`params()`](ListQuery::params).
///
/// ## Example
///
/// ```rust
/// use rosterly::{ListQuery, SortDirection};
///
/// let query = ListQuery::new()
///     .page(2)
///     .size(25)
///     .sort("lastName", SortDirection::Descending)
///     .search("ann");
///
/// let params = query.params();
/// assert!(params.contains(&("_page", "3".to_string())));
/// assert!(params.contains(&("q", "ann".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Zero-based page index.
    pub page: u32,
    /// Page size (records per page).
    pub size: u32,
    /// Field to sort by.
    pub sort_field: String,
    /// Sort direction.
    pub sort_direction: SortDirection,
    /// Free-text search term; empty means no search.
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_field: "id".to_string(),
            sort_direction: SortDirection::Ascending,
            search: String::new(),
        }
    }
}

impl ListQuery {
    /// Creates a query with the default page (0), size (10) and sort
    /// (`id` ascending).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zero-based page index.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Sets the sort field and direction.
    #[must_use]
    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = field.into();
        self.sort_direction = direction;
        self
    }

    /// Sets the free-text search term.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Translates the query into backend query-string parameters.
    ///
    /// `q` is omitted entirely when the search term is empty, never sent
    /// as an empty string. `_page` is 1-based.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);
        if !self.search.is_empty() {
            params.push(("q", self.search.clone()));
        }
        params.push(("_sort", self.sort_field.clone()));
        params.push(("_order", self.sort_direction.as_str().to_string()));
        params.push(("_page", (self.page + 1).to_string()));
        params.push(("_limit", self.size.to_string()));
        params
    }
}

/// A bounded slice of a resource collection plus the total count across
/// all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records for the requested page, in backend order.
    pub content: Vec<T>,
    /// The zero-based page index that was requested.
    pub current_page: u32,
    /// Total item count across all pages.
    pub total_items: usize,
    /// `ceil(total_items / size)`; 0 when the collection is empty.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Returns `true` if the collection has no items at all.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// Computes `ceil(total / size)`, failing on a zero page size.
pub(crate) fn total_pages(total_items: usize, size: u32) -> Result<u32> {
    if size == 0 {
        return Err(Error::invalid_argument("page size cannot be zero"));
    }
    u32::try_from(total_items.div_ceil(size as usize))
        .map_err(|_| Error::invalid_argument("page count exceeds supported range"))
}

/// Normalizes a raw paginated response into a [`Page`].
///
/// `total_items` is parsed from the `x-total-count` header, defaulting to 0
/// when the header is absent or non-numeric. A zero page size in `query` is
/// an [`invalid argument`](crate::ErrorKind::InvalidArgument) error rather
/// than a divide by zero.
pub fn normalize_page<T>(content: Vec<T>, headers: &HeaderMap, query: &ListQuery) -> Result<Page<T>> {
    let total_items = headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(0);

    Ok(Page {
        content,
        current_page: query.page,
        total_items,
        total_pages: total_pages(total_items, query.size)?,
    })
}
