//! Pagination
//!
//! Page math and the windowed page-button model for the data view footer.

use crate::constants::PAGE_WINDOW;

/// One entry in the rendered page-button strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A numbered page button
    Page { number: usize, current: bool },
    /// A gap between the forced first/last button and the window
    Ellipsis,
}

/// Total page count for a row total and page size
///
/// An empty data set still renders as one page.
pub fn total_pages(effective_total: usize, entries_per_page: usize) -> usize {
    if entries_per_page == 0 {
        return 1;
    }
    effective_total.div_ceil(entries_per_page).max(1)
}

/// Clamp a requested page into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// Half-open row index range covered by a page
pub fn page_bounds(page: usize, entries_per_page: usize, total: usize) -> (usize, usize) {
    if total == 0 || entries_per_page == 0 {
        return (0, 0);
    }
    let start = (page.max(1) - 1) * entries_per_page;
    if start >= total {
        return (0, 0);
    }
    let end = (start + entries_per_page).min(total);
    (start, end)
}

/// Windowed page-button strip
///
/// Up to [`PAGE_WINDOW`] numbered buttons centered on the current page, with
/// the first and last page forced in (behind an ellipsis when not adjacent).
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    let total = total_pages.max(1);
    let current = clamp_page(current_page, total);

    let mut start = current.saturating_sub(PAGE_WINDOW / 2).max(1);
    let end = (start + PAGE_WINDOW - 1).min(total);
    start = end.saturating_sub(PAGE_WINDOW - 1).max(1);

    let mut items = Vec::new();
    if start > 1 {
        items.push(PageItem::Page { number: 1, current: false });
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    for number in start..=end {
        items.push(PageItem::Page { number, current: number == current });
    }
    if end < total {
        if end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page { number: total, current: false });
    }
    items
}
