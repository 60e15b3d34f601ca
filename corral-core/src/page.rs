//! Table pagination state

/// Page sizes the table offers
pub const PAGE_SIZES: [usize; 3] = [5, 10, 25];

/// Page size used before the user picks one
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Zero-based page position plus the rows-per-page setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Jump to a page, clamped to the last page for `total` rows
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.min(self.page_count(total) - 1);
    }

    /// Change the rows-per-page setting
    ///
    /// Resets the page to 0 so the view never lands past the end of a
    /// shrunken page range. Returns false (leaving the state untouched)
    /// if the size is not one of the offered options.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !PAGE_SIZES.contains(&page_size) {
            return false;
        }
        self.page_size = page_size;
        self.page = 0;
        true
    }

    /// Number of pages needed for `total` rows, at least 1
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn next_page(&mut self, total: usize) {
        if self.page + 1 < self.page_count(total) {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// The visible slice of `items` for the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = PageState::new();
        assert_eq!(state.page(), 0);
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_slice_twelve_rows_size_five() {
        let items: Vec<usize> = (0..12).collect();
        let mut state = PageState::new();

        assert_eq!(state.slice(&items), &[0, 1, 2, 3, 4]);

        state.set_page(2, items.len());
        assert_eq!(state.slice(&items), &[10, 11]);
    }

    #[test]
    fn test_page_count() {
        let state = PageState::new();
        assert_eq!(state.page_count(0), 1);
        assert_eq!(state.page_count(5), 1);
        assert_eq!(state.page_count(6), 2);
        assert_eq!(state.page_count(12), 3);
    }

    #[test]
    fn test_size_change_resets_page() {
        let mut state = PageState::new();
        state.set_page(2, 12);
        assert!(state.set_page_size(10));
        assert_eq!(state.page(), 0);
        assert_eq!(state.page_size(), 10);
    }

    #[test]
    fn test_unknown_size_rejected() {
        let mut state = PageState::new();
        state.set_page(1, 12);
        assert!(!state.set_page_size(7));
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_next_and_prev_clamp() {
        let mut state = PageState::new();
        state.next_page(12);
        state.next_page(12);
        assert_eq!(state.page(), 2);
        state.next_page(12);
        assert_eq!(state.page(), 2);

        state.prev_page();
        state.prev_page();
        state.prev_page();
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn test_slice_past_end_is_empty() {
        let items: Vec<usize> = (0..3).collect();
        let mut state = PageState::new();
        state.page = 4;
        assert!(state.slice(&items).is_empty());
    }
}
