//! Page arithmetic shared by the controller and the view.
//!
//! The server's total is trusted for bounds even when it disagrees with the
//! number of items actually returned.

use crate::query::PageSize;

/// Number of pages needed for `total` results: `ceil(total / page_size)`.
/// Zero when there are no results.
pub fn page_count(total: u64, page_size: PageSize) -> u64 {
    total.div_ceil(u64::from(page_size.get()))
}

/// The last page the pager can reach. Never less than 1.
pub fn last_page(total: u64, page_size: PageSize) -> u64 {
    page_count(total, page_size).max(1)
}

pub fn has_prev(page: u32) -> bool {
    page > 1
}

pub fn has_next(page: u32, total: u64, page_size: PageSize) -> bool {
    u64::from(page) < page_count(total, page_size)
}

/// 1-based inclusive range of results shown on `page`. `(0, 0)` when there
/// are no results or `page` lies past the last page.
pub fn window(page: u32, total: u64, page_size: PageSize) -> (u64, u64) {
    let size = u64::from(page_size.get());
    let page = u64::from(page.max(1));
    let start = (page - 1) * size + 1;
    if start > total {
        return (0, 0);
    }
    (start, total.min(page * size))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
