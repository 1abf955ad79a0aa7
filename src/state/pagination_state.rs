//! PaginationModel - Derived Pagination Display State
//!
//! Page, page size and total count all belong to the parent. This only derives
//! what the pagination control displays and which buttons are enabled.

use crate::constants::ROWS_PER_PAGE_OPTIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationModel {
    /// Zero-based page index
    pub page: usize,
    pub rows_per_page: usize,
    pub total_count: usize,
}

impl PaginationModel {
    pub fn new(page: usize, rows_per_page: usize, total_count: usize) -> Self {
        Self {
            page,
            rows_per_page,
            total_count,
        }
    }

    /// Number of pages, at least 1
    pub fn page_count(&self) -> usize {
        if self.rows_per_page == 0 {
            return 1;
        }
        self.total_count.div_ceil(self.rows_per_page).max(1)
    }

    /// First displayed item (1-based), 0 when there is nothing to show
    pub fn from(&self) -> usize {
        if self.total_count == 0 {
            0
        } else {
            self.page * self.rows_per_page + 1
        }
    }

    /// Last displayed item (1-based)
    pub fn to(&self) -> usize {
        self.total_count.min((self.page + 1) * self.rows_per_page)
    }

    /// e.g. `21-40 of 57`
    pub fn range_label(&self, of: &str) -> String {
        format!("{}-{} {} {}", self.from(), self.to(), of, self.total_count)
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn prev_page(&self) -> Option<usize> {
        self.can_prev().then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        self.can_next().then(|| self.page + 1)
    }

    /// Page size choices, always including the current one
    pub fn rows_per_page_options(&self) -> Vec<usize> {
        let mut options = ROWS_PER_PAGE_OPTIONS.to_vec();
        if !options.contains(&self.rows_per_page) {
            options.push(self.rows_per_page);
            options.sort_unstable();
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_labels_and_navigation() {
        let model = PaginationModel::new(1, 20, 57);
        assert_eq!(model.page_count(), 3);
        assert_eq!(model.range_label("of"), "21-40 of 57");
        assert_eq!(model.prev_page(), Some(0));
        assert_eq!(model.next_page(), Some(2));
    }

    #[test]
    fn last_page_is_clamped() {
        let model = PaginationModel::new(2, 20, 57);
        assert_eq!(model.range_label("of"), "41-57 of 57");
        assert!(!model.can_next());
        assert_eq!(model.next_page(), None);
    }

    #[test]
    fn empty_table() {
        let model = PaginationModel::new(0, 20, 0);
        assert_eq!(model.page_count(), 1);
        assert_eq!(model.range_label("of"), "0-0 of 0");
        assert!(!model.can_prev());
        assert!(!model.can_next());
    }

    #[test]
    fn options_include_current_size() {
        assert_eq!(PaginationModel::new(0, 50, 10).rows_per_page_options(), vec![20, 50, 100]);
        assert_eq!(PaginationModel::new(0, 25, 10).rows_per_page_options(), vec![20, 25, 50, 100]);
    }
}
