//! TableEvent - User Intent Emitted by the Custom Table
//!
//! The table never changes the data it shows. Every interaction becomes one of
//! these events and the parent decides what happens.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::row::Row;
use crate::domain::sort::SortBy;

/// Events emitted by `CustomTable`
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// A different page was requested (zero-based)
    PageChanged(usize),

    /// A different page size was requested
    RowsPerPageChanged(usize),

    /// A sortable header was clicked
    SortChanged(SortBy),

    /// A data row was clicked
    RowSelected(Row),

    /// The date-range button was clicked
    OpenDateFilter,

    /// The filter button was clicked
    OpenMainFilter,

    /// A file was picked through the upload control
    FileSelected(PathBuf),

    /// The CSV export was written
    Exported(PathBuf),

    /// The CSV export could not be written
    ExportFailed(Arc<str>),
}

impl TableEvent {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            TableEvent::PageChanged(_) => "page_changed",
            TableEvent::RowsPerPageChanged(_) => "rows_per_page_changed",
            TableEvent::SortChanged(_) => "sort_changed",
            TableEvent::RowSelected(_) => "row_selected",
            TableEvent::OpenDateFilter => "open_date_filter",
            TableEvent::OpenMainFilter => "open_main_filter",
            TableEvent::FileSelected(_) => "file_selected",
            TableEvent::Exported(_) => "exported",
            TableEvent::ExportFailed(_) => "export_failed",
        }
    }
}
