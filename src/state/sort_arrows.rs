//! SortArrows - Per-Column Sort Arrow Direction
//!
//! Remembers the last direction toggled on each column. The arrow drawn for a
//! column is the parent's `sort_by.order` when the parent is sorting by that
//! column, otherwise the remembered one. Clicks toggle from the remembered
//! direction, so requests the parent hasn't applied yet still count.

use std::collections::VecDeque;

use ahash::AHashMap;

use crate::domain::sort::{SortBy, SortOrder};

/// Sort-arrow memo keyed by column name
#[derive(Debug, Clone, Default)]
pub struct SortArrows {
    toggled: AHashMap<String, SortOrder>,
    /// Requests sent to the parent and not yet seen back in `sort_by`
    in_flight: VecDeque<SortBy>,
}

impl SortArrows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction to draw for `column`, `None` when it was never sorted
    pub fn direction(&self, column: &str, sort_by: Option<&SortBy>) -> Option<SortOrder> {
        match sort_by {
            Some(sort) if sort.field == column => Some(sort.order),
            _ => self.toggled.get(column).copied(),
        }
    }

    /// Whether the parent currently sorts by `column`
    pub fn is_active(&self, column: &str, sort_by: Option<&SortBy>) -> bool {
        sort_by.is_some_and(|sort| sort.field == column)
    }

    /// Toggle `column`: unset → asc, asc → desc, desc → asc.
    /// Returns the sort request to hand to the parent.
    pub fn toggle(&mut self, column: &str, sort_by: Option<&SortBy>) -> SortBy {
        let current = self.toggled.get(column).copied().or_else(|| {
            sort_by
                .filter(|sort| sort.field == column)
                .map(|sort| sort.order)
        });
        let next = current.map_or(SortOrder::Asc, SortOrder::toggled);
        self.toggled.insert(column.to_string(), next);

        let request = SortBy::new(column, next);
        self.in_flight.push_back(request.clone());
        request
    }

    /// Take in a new `sort_by` from the parent. Our own requests coming back
    /// leave the memo alone; any other sort replaces the memo for its column.
    pub fn sync(&mut self, sort_by: Option<&SortBy>) {
        let Some(sort) = sort_by else {
            self.in_flight.clear();
            return;
        };

        if let Some(pos) = self.in_flight.iter().position(|req| req == sort) {
            self.in_flight.drain(..=pos);
            return;
        }

        self.in_flight.clear();
        self.toggled.insert(sort.field.clone(), sort.order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_clicks_cycle_asc_desc_asc() {
        let mut arrows = SortArrows::new();
        let mut sort_by: Option<SortBy> = None;

        assert_eq!(arrows.direction("amount", sort_by.as_ref()), None);

        let mut seen = Vec::new();
        for _ in 0..3 {
            let request = arrows.toggle("amount", sort_by.as_ref());
            assert_eq!(request.field, "amount");
            seen.push(request.order);
            // parent accepts the request
            sort_by = Some(request);
        }

        assert_eq!(seen, vec![SortOrder::Asc, SortOrder::Desc, SortOrder::Asc]);
    }

    #[test]
    fn cycle_works_without_parent_feedback() {
        let mut arrows = SortArrows::new();
        let orders: Vec<SortOrder> = (0..3).map(|_| arrows.toggle("amount", None).order).collect();
        assert_eq!(orders, vec![SortOrder::Asc, SortOrder::Desc, SortOrder::Asc]);
    }

    #[test]
    fn other_columns_keep_their_arrows() {
        let mut arrows = SortArrows::new();
        arrows.toggle("paid_at", None);
        arrows.toggle("paid_at", None);
        assert_eq!(arrows.direction("paid_at", None), Some(SortOrder::Desc));

        arrows.toggle("amount", None);
        arrows.toggle("amount", None);
        arrows.toggle("amount", None);

        assert_eq!(arrows.direction("paid_at", None), Some(SortOrder::Desc));
        assert_eq!(arrows.direction("amount", None), Some(SortOrder::Asc));
        assert_eq!(arrows.direction("phone", None), None);
    }

    #[test]
    fn parent_sort_wins_over_memo() {
        let mut arrows = SortArrows::new();
        arrows.toggle("amount", None);
        assert_eq!(arrows.direction("amount", None), Some(SortOrder::Asc));

        // parent reset the sort externally
        let parent = SortBy::new("amount", SortOrder::Desc);
        assert_eq!(arrows.direction("amount", Some(&parent)), Some(SortOrder::Desc));
        assert!(arrows.is_active("amount", Some(&parent)));
        assert!(!arrows.is_active("phone", Some(&parent)));

        // once the parent's sort is taken in, the next click continues from it
        arrows.sync(Some(&parent));
        assert_eq!(arrows.toggle("amount", Some(&parent)).order, SortOrder::Asc);
    }

    #[test]
    fn clicks_ahead_of_the_parent_keep_cycling() {
        let mut arrows = SortArrows::new();
        let parent = SortBy::new("amount", SortOrder::Asc);

        assert_eq!(arrows.toggle("amount", None).order, SortOrder::Asc);
        // parent still shows the first request while two more clicks land
        let orders: Vec<SortOrder> = (0..2)
            .map(|_| arrows.toggle("amount", Some(&parent)).order)
            .collect();
        assert_eq!(orders, vec![SortOrder::Desc, SortOrder::Asc]);
    }

    #[test]
    fn echoed_requests_do_not_rewind_the_memo() {
        let mut arrows = SortArrows::new();
        let first = arrows.toggle("amount", None);
        let second = arrows.toggle("amount", None);
        assert_eq!(second.order, SortOrder::Desc);

        // the parent applies the older request after the newer click
        arrows.sync(Some(&first));
        assert_eq!(arrows.toggle("amount", Some(&first)).order, SortOrder::Asc);
    }

    #[test]
    fn parent_sort_on_unclicked_column_seeds_toggle() {
        let mut arrows = SortArrows::new();
        let parent = SortBy::new("paid_at", SortOrder::Desc);
        assert_eq!(arrows.toggle("paid_at", Some(&parent)).order, SortOrder::Asc);
    }
}
