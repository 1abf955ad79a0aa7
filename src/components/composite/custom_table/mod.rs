//! CustomTable Component
//!
//! Sortable, paginated table with a header bar and three overlay slots. All
//! data decisions belong to the parent; the table only emits `TableEvent`s.

pub mod custom_table;
pub mod header_bar;
pub mod header_cell;
pub mod pagination;
pub mod upload_action;

pub use custom_table::{CustomTable, TableSlots};
pub use header_bar::HeaderBar;
pub use header_cell::HeaderCellView;
pub use pagination::Pagination;
pub use upload_action::UploadAction;

use gpui::{Styled, px};

use crate::constants::FLEX_COLUMN_MIN_WIDTH;

/// Fixed columns keep their width, the rest share the remaining space
pub(crate) fn column_width<E: Styled>(element: E, width: Option<f32>) -> E {
    match width {
        Some(width) => element.w(px(width)).flex_none(),
        None => element.flex_1().min_w(px(FLEX_COLUMN_MIN_WIDTH)),
    }
}
