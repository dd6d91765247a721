//! Paginated result pages.

use serde::Serialize;

/// A read-only page of results.
///
/// `items.len() <= size` and `total_matches >= items.len()` always hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<T> {
    items: Vec<T>,
    total_matches: u64,
    page: usize,
    size: usize,
}

/// Wrap engine hits into a result page.
///
/// Order is preserved. Hits beyond `size` are dropped from the tail and an
/// under-reported total is raised to the number of items.
pub fn assemble<T>(hits: Vec<T>, total_matches: u64, page: usize, size: usize) -> ResultPage<T> {
    let mut items = hits;
    items.truncate(size);
    let total_matches = total_matches.max(items.len() as u64);

    ResultPage {
        items,
        total_matches,
        page,
        size,
    }
}

impl<T> ResultPage<T> {
    /// An empty page.
    pub fn empty(page: usize, size: usize) -> Self {
        assemble(Vec::new(), 0, page, size)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Total number of matching records across all pages.
    pub fn total_matches(&self) -> u64 {
        self.total_matches
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages needed for all matches.
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_matches.div_ceil(self.size as u64)
    }

    /// Whether a page after this one has matches.
    pub fn has_next(&self) -> bool {
        (self.page as u64 + 1) < self.total_pages()
    }

    /// Project every item, keeping order and paging metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> ResultPage<U> {
        ResultPage {
            items: self.items.into_iter().map(f).collect(),
            total_matches: self.total_matches,
            page: self.page,
            size: self.size,
        }
    }
}
