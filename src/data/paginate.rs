use std::ops::Range;

/// Default number of cards per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Number of pages needed for `len` items. Never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slice `items` to the given 1-based page, clamped into range.
///
/// Returns the page contents and the total page count.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    let total = total_pages(items.len(), page_size);
    let range = page_range(items.len(), page.clamp(1, total), page_size);
    (&items[range], total)
}

fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = ((page - 1) * page_size).min(len);
    let end = (start + page_size).min(len);
    start..end
}

// ---------------------------------------------------------------------------
// Pagination cursor
// ---------------------------------------------------------------------------

/// Current page over a filtered result list whose length is passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    /// Back to the first page. Called on every new search.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Move by `delta` pages. Returns `false` and leaves the cursor alone if
    /// the target is outside `[1, total_pages]`.
    pub fn change_page(&mut self, delta: isize, len: usize) -> bool {
        let target = self.current_page.checked_add_signed(delta);
        match target {
            Some(page) if (1..=self.total_pages(len)).contains(&page) => {
                self.current_page = page;
                true
            }
            _ => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current_page < self.total_pages(len)
    }
}
