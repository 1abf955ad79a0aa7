//! CustomTableState - Table Props and Interaction Logic
//!
//! Everything the custom table decides without touching GPUI: which body rows
//! to draw, what the header bar shows, and which events a click produces.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::column::ColumnDescriptor;
use crate::domain::config::ActionButtonType;
use crate::domain::filter::FilterContext;
use crate::domain::row::{Row, is_row_selected};
use crate::domain::sort::{SortBy, SortOrder};
use crate::eventing::table_event::TableEvent;
use crate::export::ExportFilename;
use crate::state::pagination_state::PaginationModel;
use crate::state::sort_arrows::SortArrows;
use crate::state::upload_state::FileInput;

/// Everything the parent hands to the table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomTableProps {
    pub header_title: String,
    pub columns: Vec<ColumnDescriptor>,
    /// Rows of the current page
    pub rows: Vec<Row>,
    pub sort_by: Option<SortBy>,
    /// Zero-based page index
    pub page: usize,
    pub rows_per_page: usize,
    pub total_count: usize,
    pub is_loading: bool,
    pub selected_row: Option<Row>,
    /// Label of the active date range, empty when none
    pub active_date_range: String,
    pub active_filters_count: usize,
    pub action_button_type: ActionButtonType,
}

/// Which of the three mutually exclusive bodies is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Loading,
    Populated,
    Empty,
}

impl BodyState {
    /// Loading is checked first, then the row count
    pub fn resolve(is_loading: bool, row_count: usize) -> Self {
        if is_loading {
            BodyState::Loading
        } else if row_count > 0 {
            BodyState::Populated
        } else {
            BodyState::Empty
        }
    }
}

/// One row of the table body
#[derive(Debug, Clone, PartialEq)]
pub enum BodyRow<'a> {
    /// Loading placeholder spanning `span` columns
    Placeholder { span: usize },
    /// A data row
    Data {
        index: usize,
        row: &'a Row,
        highlighted: bool,
    },
    /// "No data to display", spanning `span` columns
    NoData { span: usize },
}

/// Display state of one header cell
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell<'a> {
    pub column: &'a ColumnDescriptor,
    pub direction: Option<SortOrder>,
    pub active: bool,
}

/// What the header bar shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderModel {
    pub title: String,
    pub action: ActionButtonType,
    /// Active range label, `None` renders as "All"
    pub date_range: Option<String>,
    /// Badge text, empty when no filter is active
    pub filter_badge: String,
    pub export_filename: String,
}

/// Table-local state plus the props last received from the parent
#[derive(Debug, Default)]
pub struct CustomTableState {
    props: CustomTableProps,
    filter_context: FilterContext,
    sort_arrows: SortArrows,
    export_filename: ExportFilename,
    file_input: FileInput,
}

impl CustomTableState {
    pub fn new(props: CustomTableProps, filter_context: FilterContext) -> Self {
        let mut state = Self {
            props,
            filter_context,
            ..Default::default()
        };
        state.refresh_export_filename();
        state
    }

    pub fn props(&self) -> &CustomTableProps {
        &self.props
    }

    pub fn filter_context(&self) -> &FilterContext {
        &self.filter_context
    }

    /// Replace the props. The export filename is derived again when the rows
    /// or the active date range changed.
    pub fn set_props(&mut self, props: CustomTableProps) {
        let rows_changed = props.rows != self.props.rows
            || props.active_date_range != self.props.active_date_range;
        if props.sort_by != self.props.sort_by {
            self.sort_arrows.sync(props.sort_by.as_ref());
        }
        self.props = props;
        if rows_changed {
            self.refresh_export_filename();
        }
    }

    /// Replace the injected organisation/filter context
    pub fn set_filter_context(&mut self, context: FilterContext) {
        if context != self.filter_context {
            self.filter_context = context;
            self.refresh_export_filename();
        }
    }

    fn refresh_export_filename(&mut self) {
        self.export_filename.recompute(
            &self.props.rows,
            &self.props.active_date_range,
            &self.filter_context,
        );
    }

    pub fn export_filename(&self) -> String {
        self.export_filename.filename()
    }

    pub fn body_state(&self) -> BodyState {
        BodyState::resolve(self.props.is_loading, self.props.rows.len())
    }

    /// Rows of the table body in display order
    pub fn body_rows(&self) -> Vec<BodyRow<'_>> {
        let span = self.props.columns.len().max(1);
        match self.body_state() {
            BodyState::Loading => vec![BodyRow::Placeholder { span }],
            BodyState::Empty => vec![BodyRow::NoData { span }],
            BodyState::Populated => self
                .props
                .rows
                .iter()
                .enumerate()
                .map(|(index, row)| BodyRow::Data {
                    index,
                    row,
                    highlighted: is_row_selected(row, self.props.selected_row.as_ref()),
                })
                .collect(),
        }
    }

    pub fn header_cells(&self) -> Vec<HeaderCell<'_>> {
        let sort_by = self.props.sort_by.as_ref();
        self.props
            .columns
            .iter()
            .map(|column| HeaderCell {
                column,
                direction: self.sort_arrows.direction(&column.name, sort_by),
                active: self.sort_arrows.is_active(&column.name, sort_by),
            })
            .collect()
    }

    pub fn header_model(&self) -> HeaderModel {
        let count = self.props.active_filters_count;
        HeaderModel {
            title: self.props.header_title.clone(),
            action: self.props.action_button_type,
            date_range: (!self.props.active_date_range.is_empty())
                .then(|| self.props.active_date_range.clone()),
            filter_badge: if count == 0 {
                String::new()
            } else {
                count.to_string()
            },
            export_filename: self.export_filename(),
        }
    }

    pub fn pagination(&self) -> PaginationModel {
        PaginationModel::new(
            self.props.page,
            self.props.rows_per_page,
            self.props.total_count,
        )
    }

    // ==================== Interactions ====================

    /// Header click. Non-sortable columns produce nothing.
    pub fn click_header(&mut self, column_name: &str) -> Option<TableEvent> {
        let column = self
            .props
            .columns
            .iter()
            .find(|c| c.name == column_name && c.sortable)?;
        let request = self
            .sort_arrows
            .toggle(&column.name, self.props.sort_by.as_ref());
        debug!(field = %request.field, order = request.order.label(), "sort requested");
        Some(TableEvent::SortChanged(request))
    }

    pub fn change_page(&self, page: usize) -> TableEvent {
        TableEvent::PageChanged(page)
    }

    /// Page size change always sends the parent back to the first page
    pub fn change_rows_per_page(&self, rows_per_page: usize) -> [TableEvent; 2] {
        [
            TableEvent::RowsPerPageChanged(rows_per_page),
            TableEvent::PageChanged(0),
        ]
    }

    pub fn click_row(&self, index: usize) -> Option<TableEvent> {
        self.props
            .rows
            .get(index)
            .map(|row| TableEvent::RowSelected(row.clone()))
    }

    pub fn select_files(&mut self, files: Vec<PathBuf>) -> Option<TableEvent> {
        self.file_input.select(files).map(TableEvent::FileSelected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::earnings::{END_DATE_FIELD, START_DATE_FIELD};

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("worker_id", "Worker"),
            ColumnDescriptor::new("amount", "Amount").sortable(),
            ColumnDescriptor::new("paid_at", "Paid At").sortable(),
        ]
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| {
                Row::new()
                    .with("id", i as u64)
                    .with("amount", (i * 10) as u64)
                    .with(START_DATE_FIELD, format!("2021-10-{:02}", i))
                    .with(END_DATE_FIELD, format!("2021-10-{:02}", i + 5))
            })
            .collect()
    }

    fn props(rows: Vec<Row>) -> CustomTableProps {
        CustomTableProps {
            header_title: "Earnings".into(),
            columns: columns(),
            total_count: rows.len(),
            rows,
            rows_per_page: 20,
            ..Default::default()
        }
    }

    #[test]
    fn loading_shows_single_placeholder_regardless_of_rows() {
        for n in [0, 1, 5] {
            let mut p = props(rows(n));
            p.is_loading = true;
            let state = CustomTableState::new(p, FilterContext::default());
            assert_eq!(state.body_rows(), vec![BodyRow::Placeholder { span: 3 }]);
        }
    }

    #[test]
    fn no_rows_shows_empty_state() {
        let state = CustomTableState::new(props(Vec::new()), FilterContext::default());
        assert_eq!(state.body_state(), BodyState::Empty);
        assert_eq!(state.body_rows(), vec![BodyRow::NoData { span: 3 }]);
    }

    #[test]
    fn populated_rows_highlight_selection() {
        let data = rows(3);
        let mut p = props(data.clone());
        p.selected_row = Some(data[1].clone());
        let mut state = CustomTableState::new(p.clone(), FilterContext::default());

        let highlighted = |state: &CustomTableState| -> Vec<bool> {
            state
                .body_rows()
                .iter()
                .map(|r| matches!(r, BodyRow::Data { highlighted: true, .. }))
                .collect()
        };
        assert_eq!(highlighted(&state), vec![false, true, false]);

        // parent accepts a click on the last row
        let Some(TableEvent::RowSelected(row)) = state.click_row(2) else {
            panic!("expected RowSelected");
        };
        p.selected_row = Some(row);
        state.set_props(p);
        assert_eq!(highlighted(&state), vec![false, false, true]);
    }

    #[test]
    fn header_clicks_cycle_and_emit_sort() {
        let mut state = CustomTableState::new(props(rows(2)), FilterContext::default());

        let mut orders = Vec::new();
        for _ in 0..3 {
            match state.click_header("amount") {
                Some(TableEvent::SortChanged(sort)) => {
                    assert_eq!(sort.field, "amount");
                    orders.push(sort.order);
                    let mut p = state.props().clone();
                    p.sort_by = Some(sort);
                    state.set_props(p);
                }
                other => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!(orders, vec![SortOrder::Asc, SortOrder::Desc, SortOrder::Asc]);

        let cells = state.header_cells();
        let paid_at = cells.iter().find(|c| c.column.name == "paid_at").expect("column");
        assert_eq!(paid_at.direction, None);
        assert!(!paid_at.active);
        let amount = cells.iter().find(|c| c.column.name == "amount").expect("column");
        assert_eq!(amount.direction, Some(SortOrder::Asc));
        assert!(amount.active);
    }

    #[test]
    fn header_clicks_cycle_while_parent_lags() {
        let mut state = CustomTableState::new(props(rows(2)), FilterContext::default());
        let mut requests = Vec::new();

        let click = |state: &mut CustomTableState| match state.click_header("amount") {
            Some(TableEvent::SortChanged(sort)) => sort,
            other => panic!("unexpected {other:?}"),
        };
        let apply = |state: &mut CustomTableState, sort: &SortBy| {
            let mut p = state.props().clone();
            p.sort_by = Some(sort.clone());
            state.set_props(p);
        };

        requests.push(click(&mut state));
        apply(&mut state, &requests[0]);
        // two clicks before the parent catches up
        requests.push(click(&mut state));
        requests.push(click(&mut state));
        // parent applies the queued requests in order
        apply(&mut state, &requests[1]);
        apply(&mut state, &requests[2]);
        requests.push(click(&mut state));

        let orders: Vec<SortOrder> = requests.iter().map(|r| r.order).collect();
        assert_eq!(
            orders,
            vec![SortOrder::Asc, SortOrder::Desc, SortOrder::Asc, SortOrder::Desc]
        );
    }

    #[test]
    fn non_sortable_header_does_nothing() {
        let mut state = CustomTableState::new(props(rows(2)), FilterContext::default());
        assert_eq!(state.click_header("worker_id"), None);
        assert_eq!(state.click_header("unknown"), None);
    }

    #[test]
    fn rows_per_page_change_resets_page() {
        let mut p = props(rows(2));
        p.page = 4;
        let state = CustomTableState::new(p, FilterContext::default());
        for size in [20, 50, 100] {
            assert_eq!(
                state.change_rows_per_page(size),
                [TableEvent::RowsPerPageChanged(size), TableEvent::PageChanged(0)]
            );
        }
        assert_eq!(state.change_page(3), TableEvent::PageChanged(3));
    }

    #[test]
    fn header_model_badges_and_range() {
        let mut p = props(rows(2));
        let state = CustomTableState::new(p.clone(), FilterContext::default());
        let header = state.header_model();
        assert_eq!(header.date_range, None);
        assert_eq!(header.filter_badge, "");
        assert_eq!(header.export_filename, "2021-10-01_to_2021-10-07.csv");

        p.active_filters_count = 2;
        p.active_date_range = "Oct 1 - Oct 5".into();
        let mut state = state;
        state.set_props(p);
        let header = state.header_model();
        assert_eq!(header.date_range.as_deref(), Some("Oct 1 - Oct 5"));
        assert_eq!(header.filter_badge, "2");
        assert_eq!(header.export_filename, "Oct 1 - Oct 5.csv");
    }

    #[test]
    fn export_filename_is_kept_when_rows_empty() {
        let mut state = CustomTableState::new(props(rows(2)), FilterContext::default());
        state.set_props(props(Vec::new()));
        assert_eq!(state.export_filename(), "2021-10-01_to_2021-10-07.csv");
    }

    #[test]
    fn file_selection_emits_first_file() {
        let mut state = CustomTableState::new(props(Vec::new()), FilterContext::default());
        let event = state.select_files(vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
        assert_eq!(event, Some(TableEvent::FileSelected(PathBuf::from("a.csv"))));
        assert_eq!(state.select_files(Vec::new()), None);
    }
}
