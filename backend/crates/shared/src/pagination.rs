//! Pagination
//!
//! Page/limit normalization shared by every list endpoint.

use serde::Serialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// A normalized page request
///
/// Always satisfies `page >= 1` and `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Normalize raw query values
    ///
    /// Missing values take the defaults; out-of-range values are clamped.
    /// Validation rejects out-of-range input before it gets here, so clamping
    /// only matters for callers that bypass the HTTP layer.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items to skip
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.limit as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination metadata returned next to a page of items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            pages: total.div_ceil(u64::from(request.limit)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), 10);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_clamping() {
        let request = PageRequest::new(Some(0), Some(0));
        assert_eq!((request.page(), request.limit()), (1, 1));

        let request = PageRequest::new(Some(3), Some(1000));
        assert_eq!(request.limit(), MAX_LIMIT);
        assert_eq!(request.offset(), 200);
    }

    #[test]
    fn test_page_count() {
        let request = PageRequest::new(Some(1), Some(10));
        assert_eq!(Pagination::new(request, 0).pages, 0);
        assert_eq!(Pagination::new(request, 10).pages, 1);
        assert_eq!(Pagination::new(request, 11).pages, 2);
    }
}
