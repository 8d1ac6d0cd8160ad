//! Page requests, page metadata and the page-link window shown under tables.

use serde::Serialize;

/// Rows per page when neither the caller nor the table configures one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// A one-based page request. Values below one are coerced to one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Zero-based index of the first row on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Number of pages needed for `total_items` rows.
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.per_page)
    }

    /// Index range of this page within `total_items` rows, clamped.
    pub fn bounds(&self, total_items: usize) -> std::ops::Range<usize> {
        let start = self.offset().min(total_items);
        let end = start.saturating_add(self.per_page).min(total_items);
        start..end
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_ITEMS_PER_PAGE)
    }
}

/// Pagination metadata returned alongside a page of rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl PageMeta {
    pub fn new(total_items: usize, request: PageRequest) -> Self {
        Self {
            total_items,
            total_pages: request.total_pages(total_items),
            current_page: request.page(),
            items_per_page: request.per_page(),
        }
    }
}

/// Page links to render: the first `left_edge` pages, a window around the
/// current page, and the last `right_edge` pages. `None` marks a gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current + 1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Page links with the window used across the dashboards.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    get_pages(total_pages, current_page.max(1), 2, 2, 4, 2)
}

/// A page of rows ready for rendering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub pagination: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: PageMeta) -> Self {
        let page = pagination.current_page.max(1);
        let pages = page_links(pagination.total_pages, page);

        Self {
            items,
            pages,
            page,
            pagination,
        }
    }
}
