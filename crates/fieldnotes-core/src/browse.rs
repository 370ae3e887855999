use crate::index::NoteIndex;
use crate::model::NoteMeta;
use crate::page::Pager;

/// Search-page state over a built index: the active query plus
/// pagination of its results.
///
/// Changing the query always snaps back to page 1, and page transitions
/// at the bounds are no-ops, so the view can never point past its
/// results.
pub struct NoteBrowser<'a> {
    index: &'a NoteIndex,
    query: String,
    pager: Pager,
}

impl<'a> NoteBrowser<'a> {
    pub fn new(index: &'a NoteIndex, page_size: usize) -> Self {
        Self {
            index,
            query: String::new(),
            pager: Pager::new(page_size),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// Replace the active query and reset to page 1.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.pager.reset();
    }

    /// Everything matching the active query, in index order.
    pub fn results(&self) -> Vec<&'a NoteMeta> {
        self.index.search(&self.query)
    }

    /// The current page of results.
    pub fn page_items(&self) -> Vec<&'a NoteMeta> {
        let results = self.results();
        let window = self.pager.window(results.len());
        results[window].to_vec()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.results().len())
    }

    /// Whether pagination controls should be shown at all.
    pub fn show_pagination(&self) -> bool {
        !self.pager.single_page(self.results().len())
    }

    /// Jump to `page`, clamped to the valid range for the current
    /// results.
    pub fn set_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.pager.set_page(page, total);
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.pager.next(total)
    }

    pub fn prev_page(&mut self) -> bool {
        self.pager.prev()
    }
}
