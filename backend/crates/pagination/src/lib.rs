//! Offset pagination primitives for windowing ordered collections.
//!
//! Endpoints that page through an already-loaded list share the same window
//! arithmetic: a zero-based page number and a page size select the half-open
//! range `[page * size, min(page * size + size, total))`. Requests past the
//! end of the collection clamp to an empty window rather than failing, so
//! callers can treat out-of-range pages as "no more items".

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Page selected when the caller omits the `page` parameter.
pub const DEFAULT_PAGE: u32 = 0;
/// Page size applied when the caller omits the `size` parameter.
pub const DEFAULT_SIZE: u32 = 10;

const fn default_page() -> u32 {
    DEFAULT_PAGE
}

const fn default_size() -> u32 {
    DEFAULT_SIZE
}

/// Zero-based page window over an ordered collection.
///
/// Deserialises directly from query strings, filling in the documented
/// defaults (`page=0`, `size=10`) for absent parameters.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::new(2, 10);
/// assert_eq!(request.bounds(25), 20..25);
/// assert_eq!(request.bounds(5), 5..5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_size")]
    size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}

impl PageRequest {
    /// Construct a window for the given zero-based page and page size.
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Zero-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items per page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Half-open index range this window selects from a collection of
    /// `total` items.
    ///
    /// The range clamps to `total`, so windows that start at or beyond the
    /// end of the collection come back empty instead of out of bounds.
    #[must_use]
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let offset = u64::from(self.page).saturating_mul(u64::from(self.size));
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(total);
        let size = usize::try_from(self.size).unwrap_or(usize::MAX);
        let end = start.saturating_add(size).min(total);
        start..end
    }

    /// Borrow the window this request selects from `items`.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let items: Vec<u32> = (0..25).collect();
    /// let window = PageRequest::new(3, 10).slice(&items);
    /// assert!(window.is_empty());
    /// ```
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(self.bounds(items.len())).unwrap_or(&[])
    }
}
