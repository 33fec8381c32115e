/// Validated page coordinates (1-based page number, fixed page size)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u32,
    pub limit: u32,
}

impl PaginationParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Number of rows to skip before the requested page.
    ///
    /// Callers validate `page >= 1` beforehand; a zero page is treated as
    /// the first one rather than underflowing.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// Paginated response wrapper
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    /// 1-based position of the first row of the requested window
    pub items_from: u64,
    /// 1-based position of the last row of the requested window
    pub items_to: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let params = PaginationParams::new(page, limit);
        let total_pages = if limit == 0 {
            0
        } else {
            u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
        };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
            items_from: params.offset() + 1,
            items_to: params.offset() + u64::from(limit),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
            items_from: self.items_from,
            items_to: self.items_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_for_first_page() {
        assert_eq!(PaginationParams::new(1, 15).offset(), 0);
        assert_eq!(PaginationParams::new(3, 5).offset(), 10);
    }

    #[test]
    fn window_metadata_matches_page() {
        let result = PaginatedResult::new(vec![1, 2, 3, 4, 5], 12, 2, 5);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.items_from, 6);
        assert_eq!(result.items_to, 10);
    }

    #[test]
    fn page_beyond_range_keeps_true_total() {
        let result: PaginatedResult<u8> = PaginatedResult::new(Vec::new(), 7, 9, 10);
        assert!(result.items.is_empty());
        assert_eq!(result.total, 7);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page, 9);
    }

    #[test]
    fn empty_source_has_no_pages() {
        let result: PaginatedResult<u8> = PaginatedResult::new(Vec::new(), 0, 1, 5);
        assert_eq!(result.total_pages, 0);
    }
}
