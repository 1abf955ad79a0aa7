//! CustomTable - The Table Entity
//!
//! Holds the props last pushed by the parent plus the table-local state (sort
//! arrows, export filename, file input). Renders the header bar, the table
//! with pagination above and below the rows, and then the filter and details
//! slots.

use std::path::PathBuf;
use std::sync::Arc;

use gpui::{
    AnyView, ClickEvent, Context, EventEmitter, InteractiveElement, IntoElement, ParentElement,
    PathPromptOptions, Render, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName, Sizable};
use tracing::{debug, error, info, warn};

use super::column_width;
use super::header_bar::HeaderBar;
use super::header_cell::HeaderCellView;
use super::pagination::Pagination;
use crate::constants::{HEADER_HEIGHT, ROW_HEIGHT};
use crate::domain::column::ColumnDescriptor;
use crate::domain::filter::FilterContext;
use crate::domain::row::Row;
use crate::eventing::table_event::TableEvent;
use crate::export::write_export;
use crate::helpers::resolve_export_dir;
use crate::i18n::{Locale, t};
use crate::state::table_state::{BodyRow, CustomTableProps, CustomTableState};
use crate::theme::colors::AppColors;
use crate::utils::format::capitalize_words;

/// Opaque views rendered after the table, in this order
#[derive(Default, Clone)]
pub struct TableSlots {
    pub main_filter: Option<AnyView>,
    pub date_filter: Option<AnyView>,
    pub row_details: Option<AnyView>,
}

/// Custom table component
pub struct CustomTable {
    state: CustomTableState,
    slots: TableSlots,
    locale: Locale,
    export_dir: Option<PathBuf>,
    exporting: bool,
}

impl EventEmitter<TableEvent> for CustomTable {}

impl CustomTable {
    pub fn new(props: CustomTableProps, filter_context: FilterContext, _cx: &mut Context<Self>) -> Self {
        Self {
            state: CustomTableState::new(props, filter_context),
            slots: TableSlots::default(),
            locale: Locale::default(),
            export_dir: None,
            exporting: false,
        }
    }

    pub fn set_props(&mut self, props: CustomTableProps, cx: &mut Context<Self>) {
        self.state.set_props(props);
        cx.notify();
    }

    pub fn set_filter_context(&mut self, context: FilterContext, cx: &mut Context<Self>) {
        self.state.set_filter_context(context);
        cx.notify();
    }

    pub fn set_slots(&mut self, slots: TableSlots, cx: &mut Context<Self>) {
        self.slots = slots;
        cx.notify();
    }

    pub fn set_locale(&mut self, locale: Locale, cx: &mut Context<Self>) {
        self.locale = locale;
        cx.notify();
    }

    /// Directory exports are written to; the Downloads folder when `None`
    pub fn set_export_dir(&mut self, dir: Option<PathBuf>) {
        self.export_dir = dir;
    }

    pub fn state(&self) -> &CustomTableState {
        &self.state
    }

    // ==================== Interactions ====================

    fn header_clicked(&mut self, column: &str, cx: &mut Context<Self>) {
        if let Some(event) = self.state.click_header(column) {
            cx.emit(event);
            cx.notify();
        }
    }

    fn page_changed(&mut self, page: usize, cx: &mut Context<Self>) {
        debug!(page, "page requested");
        cx.emit(self.state.change_page(page));
    }

    fn rows_per_page_changed(&mut self, rows_per_page: usize, cx: &mut Context<Self>) {
        debug!(rows_per_page, "page size requested");
        for event in self.state.change_rows_per_page(rows_per_page) {
            cx.emit(event);
        }
    }

    fn row_clicked(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Some(event) = self.state.click_row(index) {
            cx.emit(event);
        }
    }

    /// Write the current rows to `<export dir>/<derived filename>` off the main thread
    fn export(&mut self, cx: &mut Context<Self>) {
        if self.exporting {
            return;
        }

        let rows = self.state.props().rows.clone();
        let filename = self.state.export_filename();
        let dir = match resolve_export_dir(self.export_dir.as_deref()) {
            Ok(dir) => dir,
            Err(e) => {
                error!(error = %e, "no export directory");
                cx.emit(TableEvent::ExportFailed(Arc::from(e.to_string())));
                return;
            }
        };

        info!(filename = %filename, rows = rows.len(), "exporting csv");
        self.exporting = true;
        cx.notify();

        cx.spawn(async move |this, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { write_export(&dir, &filename, &rows).await })
                .await;

            let _ = this.update(cx, |this, cx| {
                this.exporting = false;
                match result {
                    Ok(path) => {
                        info!(path = %path.display(), "csv exported");
                        cx.emit(TableEvent::Exported(path));
                    }
                    Err(e) => {
                        error!(error = %e, "csv export failed");
                        cx.emit(TableEvent::ExportFailed(Arc::from(e.to_string())));
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    /// Open the native picker and report the first chosen file
    fn pick_file(&mut self, cx: &mut Context<Self>) {
        let paths = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: false,
            prompt: None,
        });

        cx.spawn(async move |this, cx| {
            let files = match paths.await {
                Ok(Ok(Some(files))) => files,
                Ok(Ok(None)) => {
                    debug!("file picker cancelled");
                    return;
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "file picker failed");
                    return;
                }
                Err(_) => return,
            };

            let _ = this.update(cx, |this, cx| {
                if let Some(event) = this.state.select_files(files) {
                    info!(kind = event.kind(), "file selected");
                    cx.emit(event);
                }
            });
        })
        .detach();
    }

    // ==================== Rendering ====================

    fn render_header_row(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let cells = self
            .state
            .header_cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let name = cell.column.name.clone();
                HeaderCellView::new(index, cell).on_click(cx.listener(
                    move |this, _event: &ClickEvent, _window, cx| {
                        this.header_clicked(&name, cx);
                    },
                ))
            })
            .collect::<Vec<_>>();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(AppColors::table_header_bg())
            .border_b_1()
            .border_color(AppColors::border())
            .children(cells)
    }

    fn render_data_row(
        &self,
        index: usize,
        row: &Row,
        highlighted: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let columns: &[ColumnDescriptor] = &self.state.props().columns;
        let bg = if highlighted {
            AppColors::table_row_selected()
        } else if index % 2 == 0 {
            AppColors::content_bg()
        } else {
            AppColors::table_row_alt()
        };

        div()
            .id(("table-row", index))
            .h(px(ROW_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .when(!highlighted, |el| el.hover(|s| s.bg(AppColors::table_row_hover())))
            .border_b_1()
            .border_color(AppColors::border())
            .cursor_pointer()
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.row_clicked(index, cx);
            }))
            .children(columns.iter().map(|column| {
                column_width(div(), column.width)
                    .px_3()
                    .text_sm()
                    .text_color(AppColors::text_primary())
                    .overflow_hidden()
                    .whitespace_nowrap()
                    .text_ellipsis()
                    .child(capitalize_words(&row.display(&column.name)))
            }))
    }

    fn render_spanning_row(&self, content: impl IntoElement) -> impl IntoElement {
        div()
            .h(px(ROW_HEIGHT * 2.0))
            .w_full()
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .text_sm()
            .text_color(AppColors::text_muted())
            .border_b_1()
            .border_color(AppColors::border())
            .child(content)
    }

    fn render_body(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.locale;
        let rows = self
            .state
            .body_rows()
            .into_iter()
            .map(|body_row| match body_row {
                BodyRow::Placeholder { .. } => self
                    .render_spanning_row(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(Icon::new(IconName::Loader).small())
                            .child(t(locale, "table-loading")),
                    )
                    .into_any_element(),
                BodyRow::NoData { .. } => self
                    .render_spanning_row(t(locale, "table-no-data"))
                    .into_any_element(),
                BodyRow::Data {
                    index,
                    row,
                    highlighted,
                } => self
                    .render_data_row(index, row, highlighted, cx)
                    .into_any_element(),
            })
            .collect::<Vec<_>>();

        div()
            .id("table-body")
            .flex_1()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .children(rows)
    }

    fn render_pagination(&self, id: &'static str, cx: &mut Context<Self>) -> impl IntoElement {
        Pagination::new(id, self.state.pagination())
            .labels(t(self.locale, "rows-per-page"), t(self.locale, "pagination-of"))
            .on_page_change(cx.listener(|this, page: &usize, _window, cx| {
                this.page_changed(*page, cx);
            }))
            .on_rows_per_page_change(cx.listener(|this, rows_per_page: &usize, _window, cx| {
                this.rows_per_page_changed(*rows_per_page, cx);
            }))
    }
}

impl Render for CustomTable {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let header = HeaderBar::new(self.state.header_model(), self.locale)
            .exporting(self.exporting)
            .on_date_range(cx.listener(|_this, _event: &ClickEvent, _window, cx| {
                cx.emit(TableEvent::OpenDateFilter);
            }))
            .on_filter(cx.listener(|_this, _event: &ClickEvent, _window, cx| {
                cx.emit(TableEvent::OpenMainFilter);
            }))
            .on_export(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.export(cx);
            }))
            .on_upload(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.pick_file(cx);
            }));

        let table = div()
            .flex_1()
            .flex()
            .flex_col()
            .mx_4()
            .mb_4()
            .bg(AppColors::content_bg())
            .border_1()
            .border_color(AppColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_pagination("pagination-top", cx))
            .child(self.render_header_row(cx))
            .child(self.render_body(cx))
            .child(
                div()
                    .border_t_1()
                    .border_color(AppColors::border())
                    .child(self.render_pagination("pagination-bottom", cx)),
            );

        let slots = [
            self.slots.main_filter.clone(),
            self.slots.date_filter.clone(),
            self.slots.row_details.clone(),
        ];

        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(AppColors::background())
            .child(header)
            .child(table)
            .children(slots.into_iter().flatten())
    }
}
