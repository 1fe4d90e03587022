use std::ops::Range;

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// `ceil(rows / PAGE_SIZE)`; zero rows means zero pages.
pub fn page_count(rows: usize) -> usize {
    rows.div_ceil(PAGE_SIZE)
}

/// Pull `page` into `1..=max(1, page_count)`.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// Index range of `page` (1-based) clipped to `rows`.
pub fn page_range(page: usize, rows: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(rows);
    let end = start.saturating_add(PAGE_SIZE).min(rows);
    start..end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
    /// Jump to a 1-based page number.
    To(usize),
}

impl PageNav {
    /// Target page from `current`. Never wraps, never leaves `1..=max(1, page_count)`.
    pub fn resolve(self, current: usize, page_count: usize) -> usize {
        let target = match self {
            Self::First => 1,
            Self::Previous => current.saturating_sub(1),
            Self::Next => current.saturating_add(1),
            Self::Last => page_count,
            Self::To(page) => page,
        };
        clamp_page(target, page_count)
    }
}
