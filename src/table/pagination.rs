pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Page window over an already filtered row set. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
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
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Requested page, pulled back into range for `total` rows.
    pub fn current_page(&self, total: usize) -> usize {
        self.page.min(self.page_count(total))
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.current_page(rows.len()) - 1) * self.page_size;
        let end = (start + self.page_size).min(rows.len());
        &rows[start.min(end)..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_pages_of_the_filtered_rows() {
        let rows: Vec<u32> = (1..=19).collect();
        let mut pages = Pagination::default();
        assert_eq!(pages.page_count(rows.len()), 3);
        assert_eq!(pages.slice(&rows), &rows[..8]);

        pages.set_page(3);
        assert_eq!(pages.slice(&rows), &rows[16..]);

        // filtering shrinks the set: the page is clamped, not emptied
        assert_eq!(pages.current_page(5), 1);
        assert_eq!(pages.slice(&rows[..5]), &rows[..5]);
    }

    #[test]
    fn empty_set_has_one_empty_page() {
        let pages = Pagination::new(0);
        let rows: Vec<u32> = Vec::new();
        assert_eq!(pages.page_size(), 1);
        assert_eq!(pages.page_count(0), 1);
        assert!(pages.slice(&rows).is_empty());
    }
}
