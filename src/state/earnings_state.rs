//! EarningsState - Parent-Side Table Data
//!
//! Owns everything the custom table only displays: the full row set, the
//! applied filters, sort and pagination. Filtering, sorting and paging are
//! done here, never inside the table.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::column::ColumnDescriptor;
use crate::domain::config::ActionButtonType;
use crate::domain::earnings::{END_DATE_FIELD, ORGANISATION_FIELD, PAYMENT_METHOD_FIELD, START_DATE_FIELD};
use crate::domain::filter::{DateRangePreset, FilterContext, Organisation, SelectedFilters};
use crate::domain::row::{Row, display_value};
use crate::domain::sort::{SortBy, SortOrder};
use crate::state::pagination_state::PaginationModel;
use crate::state::table_state::CustomTableProps;
use crate::utils::format::parse_date;

/// State for the earnings page
#[derive(Debug, Clone)]
pub struct EarningsState {
    rows: Vec<Row>,
    organisations: Vec<Organisation>,
    today: NaiveDate,
    /// Applied filters
    pub filters: SelectedFilters,
    /// Applied date range
    pub date_range: DateRangePreset,
    pub sort_by: Option<SortBy>,
    /// Zero-based page index
    pub page: usize,
    pub rows_per_page: usize,
    pub selected_row: Option<Row>,
    pending_fetches: usize,
    pub main_filter_open: bool,
    pub date_filter_open: bool,
}

impl EarningsState {
    pub fn new(rows: Vec<Row>, organisations: Vec<Organisation>, rows_per_page: usize, today: NaiveDate) -> Self {
        Self {
            rows,
            organisations,
            today,
            filters: SelectedFilters::default(),
            date_range: DateRangePreset::All,
            sort_by: None,
            page: 0,
            rows_per_page: rows_per_page.max(1),
            selected_row: None,
            pending_fetches: 0,
            main_filter_open: false,
            date_filter_open: false,
        }
    }

    pub fn organisations(&self) -> &[Organisation] {
        &self.organisations
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Replace all rows
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.page = 0;
        self.selected_row = None;
    }

    /// A fetch started. Loading lasts until every started fetch finished.
    pub fn begin_fetch(&mut self) {
        self.pending_fetches += 1;
    }

    pub fn finish_fetch(&mut self) {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);
    }

    pub fn is_loading(&self) -> bool {
        self.pending_fetches > 0
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.pagination().page_count().saturating_sub(1));
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = Some(sort_by);
    }

    pub fn select_row(&mut self, row: Row) {
        self.selected_row = Some(row);
    }

    pub fn clear_selection(&mut self) {
        self.selected_row = None;
    }

    pub fn set_organisation(&mut self, organisation_id: Option<String>) {
        self.filters.organisation_id = organisation_id;
        self.page = 0;
    }

    pub fn set_payment_method(&mut self, method: Option<String>) {
        self.filters.payment_method = method;
        self.page = 0;
    }

    pub fn set_date_range(&mut self, preset: DateRangePreset) {
        self.date_range = preset;
        self.page = 0;
    }

    /// Distinct payment methods across all rows
    pub fn payment_methods(&self) -> Vec<String> {
        let mut methods: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.display(PAYMENT_METHOD_FIELD))
            .filter(|m| !m.is_empty())
            .collect();
        methods.sort();
        methods.dedup();
        methods
    }

    /// Label of the applied date range, empty for `All`
    pub fn active_date_range(&self) -> String {
        self.date_range.label(self.today)
    }

    pub fn filter_context(&self) -> FilterContext {
        FilterContext::new(self.organisations.clone(), self.filters.clone())
    }

    /// Rows passing the filters, sorted
    pub fn filtered_rows(&self) -> Vec<&Row> {
        let bounds = self.date_range.bounds(self.today);
        let mut rows: Vec<&Row> = self
            .rows
            .iter()
            .filter(|row| self.matches_filters(row))
            .filter(|row| bounds.is_none_or(|(lo, hi)| overlaps(row, lo, hi)))
            .collect();

        if let Some(sort) = &self.sort_by {
            rows.sort_by(|a, b| {
                let ord = compare_values(a.get(&sort.field), b.get(&sort.field));
                match sort.order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            });
        }

        rows
    }

    fn matches_filters(&self, row: &Row) -> bool {
        let org_ok = self
            .filters
            .organisation_id
            .as_deref()
            .is_none_or(|id| row.display(ORGANISATION_FIELD) == id);
        let method_ok = self
            .filters
            .payment_method
            .as_deref()
            .is_none_or(|m| row.display(PAYMENT_METHOD_FIELD) == m);
        org_ok && method_ok
    }

    pub fn total_count(&self) -> usize {
        self.filtered_rows().len()
    }

    pub fn pagination(&self) -> PaginationModel {
        PaginationModel::new(self.page, self.rows_per_page, self.total_count())
    }

    /// Rows of the current page
    pub fn page_rows(&self) -> Vec<Row> {
        self.filtered_rows()
            .into_iter()
            .skip(self.page * self.rows_per_page)
            .take(self.rows_per_page)
            .cloned()
            .collect()
    }

    /// Props for the custom table
    pub fn table_props(
        &self,
        header_title: &str,
        columns: &[ColumnDescriptor],
        action_button_type: ActionButtonType,
    ) -> CustomTableProps {
        CustomTableProps {
            header_title: header_title.to_string(),
            columns: columns.to_vec(),
            rows: self.page_rows(),
            sort_by: self.sort_by.clone(),
            page: self.page,
            rows_per_page: self.rows_per_page,
            total_count: self.total_count(),
            is_loading: self.is_loading(),
            selected_row: self.selected_row.clone(),
            active_date_range: self.active_date_range(),
            active_filters_count: self.filters.active_count(),
            action_button_type,
        }
    }
}

/// Whether the row's period touches `[lo, hi]`. Rows without dates never match.
fn overlaps(row: &Row, lo: NaiveDate, hi: NaiveDate) -> bool {
    let start = parse_date(&row.display(START_DATE_FIELD));
    let end = parse_date(&row.display(END_DATE_FIELD)).or(start);
    match (start.or(end), end) {
        (Some(start), Some(end)) => start <= hi && end >= lo,
        _ => false,
    }
}

/// Numeric-aware comparison; missing and null values sort first
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => display_value(a).to_lowercase().cmp(&display_value(b).to_lowercase()),
        },
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::earnings::{sample_organisations, sample_rows};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 10, 31).expect("date")
    }

    fn state(n: usize) -> EarningsState {
        EarningsState::new(sample_rows(n, today()), sample_organisations(), 20, today())
    }

    #[test]
    fn pages_slice_filtered_rows() {
        let mut s = state(57);
        assert_eq!(s.total_count(), 57);
        assert_eq!(s.page_rows().len(), 20);

        s.set_page(2);
        assert_eq!(s.page_rows().len(), 17);

        s.set_page(10);
        assert_eq!(s.page, 2);
    }

    #[test]
    fn rows_per_page_resets_page() {
        let mut s = state(57);
        s.set_page(2);
        s.set_rows_per_page(50);
        assert_eq!(s.page, 0);
        assert_eq!(s.page_rows().len(), 50);
    }

    #[test]
    fn organisation_filter_counts_and_limits() {
        let mut s = state(30);
        s.set_organisation(Some("2".into()));
        assert_eq!(s.filters.active_count(), 1);
        assert_eq!(s.total_count(), 10);
        assert!(s.page_rows().iter().all(|r| r.display(ORGANISATION_FIELD) == "2"));
    }

    #[test]
    fn sorts_numbers_numerically() {
        let mut s = EarningsState::new(
            vec![
                Row::new().with("id", 1).with("amount", 100),
                Row::new().with("id", 2).with("amount", 9),
                Row::new().with("id", 3).with("amount", "25"),
                Row::new().with("id", 4),
            ],
            Vec::new(),
            20,
            today(),
        );

        s.set_sort_by(SortBy::new("amount", SortOrder::Asc));
        let ids: Vec<String> = s.page_rows().iter().filter_map(Row::id).collect();
        assert_eq!(ids, vec!["4", "2", "3", "1"]);

        s.set_sort_by(SortBy::new("amount", SortOrder::Desc));
        let ids: Vec<String> = s.page_rows().iter().filter_map(Row::id).collect();
        assert_eq!(ids, vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn date_range_keeps_overlapping_periods() {
        let mut s = state(60);
        s.set_date_range(DateRangePreset::Last7Days);
        assert_eq!(s.active_date_range(), "Oct 25 - Oct 31");

        let lo = NaiveDate::from_ymd_opt(2021, 10, 25).expect("date");
        for row in s.filtered_rows() {
            let end = parse_date(&row.display(END_DATE_FIELD)).expect("end");
            assert!(end >= lo);
        }
        assert!(s.total_count() < 60);
    }

    #[test]
    fn table_props_reflect_state() {
        let mut s = state(25);
        s.set_organisation(Some("1".into()));
        s.begin_fetch();
        let props = s.table_props("Earnings", &[], ActionButtonType::Upload);

        assert!(props.is_loading);
        assert_eq!(props.active_filters_count, 1);
        assert_eq!(props.total_count, 9);
        assert_eq!(props.action_button_type, ActionButtonType::Upload);
        assert_eq!(props.active_date_range, "");
    }

    #[test]
    fn loading_spans_overlapping_fetches() {
        let mut s = state(5);
        s.begin_fetch();
        s.begin_fetch();
        s.finish_fetch();
        assert!(s.is_loading());
        s.finish_fetch();
        assert!(!s.is_loading());
        s.finish_fetch();
        assert!(!s.is_loading());
    }

    #[test]
    fn payment_methods_are_distinct() {
        let s = state(10);
        assert_eq!(s.payment_methods(), vec!["bank transfer", "cash", "mobile money"]);
    }
}
