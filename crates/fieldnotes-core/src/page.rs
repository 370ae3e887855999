/// Fixed-size page windows over a filtered collection.
///
/// `current_page` is 1-based and stays within `[1, total_pages]`, or at 1
/// when the collection is empty. The pager never indexes out of bounds:
/// the window is clamped to the collection it is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
}

impl Pager {
    pub const DEFAULT_PAGE_SIZE: usize = 5;

    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages needed for `len` items; 0 when empty.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// True when everything fits on one page and callers should hide the
    /// pagination controls.
    pub fn single_page(&self, len: usize) -> bool {
        len <= self.page_size
    }

    /// The current page's half-open index range into a collection of
    /// `len` items, clamped to the collection bounds.
    pub fn window(&self, len: usize) -> std::ops::Range<usize> {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    /// Slice out the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.window(items.len())]
    }

    /// Advance one page. No-op at the last page; returns whether the
    /// page changed.
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.current_page < total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. No-op at page 1; returns whether the page
    /// changed.
    pub fn prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Back to page 1. Invoked whenever the active query changes.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Jump to `page`, clamped to `[1, max(1, total_pages)]`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}
