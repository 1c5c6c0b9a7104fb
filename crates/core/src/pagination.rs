//! Page-number pagination primitives.
//!
//! The project listing endpoints expose classic page/size pagination with
//! total-count metadata, so the repository layer returns a [`Page`] of raw
//! rows and the API layer maps it into a page of views without disturbing
//! row order. Sorting is restricted to a whitelisted column set — callers
//! never supply SQL.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Defaults and bounds
// ---------------------------------------------------------------------------

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of rows per page.
pub const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Columns a caller may sort project listings by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    StartDate,
    Title,
    CreatedAt,
}

impl SortField {
    /// The projected column backing this sort field.
    ///
    /// Returning a fixed string (never caller input) is what makes it safe
    /// to interpolate into an `ORDER BY` clause.
    pub fn order_by_column(self) -> &'static str {
        match self {
            SortField::StartDate => "p.start_date",
            SortField::Title => "p.title",
            SortField::CreatedAt => "p.created_at",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A validated sort criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

// ---------------------------------------------------------------------------
// PageRequest
// ---------------------------------------------------------------------------

/// A validated pagination request (1-based page number).
///
/// Construct via [`PageRequest::new`], which clamps out-of-range input
/// instead of erroring: page floors at 1, size is clamped to
/// `[1, MAX_PAGE_SIZE]` and defaults to [`DEFAULT_PAGE_SIZE`].
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    page: i64,
    size: i64,
    pub sort: Option<SortSpec>,
}

impl PageRequest {
    pub fn new(page: Option<i64>, size: Option<i64>, sort: Option<SortSpec>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        Self { page, size, sort }
    }

    /// 1-based page number.
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Rows per page.
    pub fn size(&self) -> i64 {
        self.size
    }

    /// SQL OFFSET for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.size
    }

    /// SQL LIMIT for this page.
    pub fn limit(&self) -> i64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One page of results plus the metadata needed to render a pager.
///
/// `items` preserves the ordering produced by the underlying query.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number this slice came from.
    pub page: i64,
    /// Requested page size (the last page may hold fewer items).
    pub size: i64,
    /// Total matching rows across all pages.
    pub total_elements: i64,
    /// Total number of pages.
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Wrap a page of rows with its pagination metadata.
    pub fn new(items: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total_elements,
            total_pages: total_pages(total_elements, request.size()),
        }
    }

    /// Map every row through `f`, preserving order and metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// Ceiling division of `total_elements` by `size`.
fn total_pages(total_elements: i64, size: i64) -> i64 {
    if total_elements <= 0 {
        0
    } else {
        (total_elements + size - 1) / size
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
