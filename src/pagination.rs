use serde::Serialize;

/// Fixed page size used for every listing request.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Half-width of the contiguous page range kept around the current page.
const WINDOW_DELTA: usize = 2;

/// Computes the set of page numbers to render for a pager.
///
/// Pages are 0-based. Entries are either `Some(page)` or `None` for an
/// ellipsis marker. The window keeps up to [`WINDOW_DELTA`] pages on each
/// side of `current_page` and always includes the first and last page,
/// inserting ellipses where pages are elided.
///
/// Pure function of its inputs; one page or fewer yields no window at all.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<Option<usize>> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let last_page = total_pages - 1;
    let start = current_page.saturating_sub(WINDOW_DELTA);
    let end = (current_page + WINDOW_DELTA).min(last_page);

    let mut pages = Vec::new();

    if start > 0 {
        pages.push(Some(0));
        if start > 1 {
            pages.push(None);
        }
    }

    pages.extend((start..=end).map(Some));

    if end < last_page {
        if end < last_page - 1 {
            pages.push(None);
        }
        pages.push(Some(last_page));
    }

    pages
}

/// One page of items together with the metadata needed to render a pager.
///
/// Replaced wholesale on every successful fetch; items and metadata are
/// never mixed across responses.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page numbers to render; `None` marks an ellipsis.
    pub pages: Vec<Option<usize>>,
    /// Current 0-based page index.
    pub page: usize,
    pub total_pages: usize,
    pub total_elements: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize, total_elements: u64) -> Self {
        let pages = page_window(page, total_pages);

        Self {
            items,
            pages,
            page,
            total_pages,
            total_elements,
        }
    }

    /// Empty result set shown on the first page, used when a fetch fails.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0, 0)
    }
}
