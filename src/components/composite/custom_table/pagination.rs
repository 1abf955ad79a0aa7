//! Pagination Component
//!
//! Rows-per-page choice, `{from}-{to} of {count}` and previous/next buttons.
//! Rendered above and below the table rows.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName, Sizable};

use crate::state::pagination_state::PaginationModel;
use crate::theme::colors::AppColors;

type PageHandler = Rc<dyn Fn(&usize, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    id: SharedString,
    model: PaginationModel,
    rows_per_page_label: SharedString,
    of_label: SharedString,
    on_page_change: Option<PageHandler>,
    on_rows_per_page_change: Option<PageHandler>,
}

impl Pagination {
    /// `id` keeps the two instances (top and bottom) apart
    pub fn new(id: impl Into<SharedString>, model: PaginationModel) -> Self {
        Self {
            id: id.into(),
            model,
            rows_per_page_label: "Rows per page:".into(),
            of_label: "of".into(),
            on_page_change: None,
            on_rows_per_page_change: None,
        }
    }

    pub fn labels(mut self, rows_per_page: impl Into<SharedString>, of: impl Into<SharedString>) -> Self {
        self.rows_per_page_label = rows_per_page.into();
        self.of_label = of.into();
        self
    }

    pub fn on_page_change(mut self, handler: impl Fn(&usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    pub fn on_rows_per_page_change(
        mut self,
        handler: impl Fn(&usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_rows_per_page_change = Some(Rc::new(handler));
        self
    }

    fn element_id(&self, part: &str) -> ElementId {
        ElementId::Name(format!("{}-{}", self.id, part).into())
    }

    fn nav_button(&self, part: &str, icon: IconName, target: Option<usize>) -> impl IntoElement {
        let enabled = target.is_some();
        let handler = self.on_page_change.clone();

        div()
            .id(self.element_id(part))
            .size(px(28.0))
            .rounded_full()
            .flex()
            .items_center()
            .justify_center()
            .text_color(if enabled {
                AppColors::text_primary()
            } else {
                AppColors::text_muted()
            })
            .child(Icon::new(icon).small())
            .when(enabled, |el| {
                el.cursor_pointer()
                    .hover(|s| s.bg(AppColors::table_row_hover()))
            })
            .when_some(target.zip(handler), |el, (page, handler)| {
                el.on_click(move |_event: &ClickEvent, window, cx| handler(&page, window, cx))
            })
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current_rpp = self.model.rows_per_page;

        let options = self.model.rows_per_page_options().into_iter().map(|n| {
            let selected = n == current_rpp;
            let handler = self.on_rows_per_page_change.clone();
            div()
                .id(self.element_id(&format!("rpp-{n}")))
                .px_2()
                .py_px()
                .rounded_sm()
                .text_size(px(12.0))
                .text_color(if selected {
                    AppColors::accent()
                } else {
                    AppColors::text_secondary()
                })
                .when(selected, |el| el.font_weight(gpui::FontWeight::SEMIBOLD))
                .cursor_pointer()
                .hover(|s| s.bg(AppColors::table_row_hover()))
                .when_some(handler, |el, handler| {
                    el.on_click(move |_event: &ClickEvent, window, cx| handler(&n, window, cx))
                })
                .child(n.to_string())
        });

        div()
            .w_full()
            .px_4()
            .py_1()
            .flex()
            .items_center()
            .justify_end()
            .gap_4()
            .text_size(px(12.0))
            .text_color(AppColors::text_secondary())
            // Page size
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(self.rows_per_page_label.clone())
                    .children(options),
            )
            // Range
            .child(div().child(self.model.range_label(&self.of_label)))
            // Navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(self.nav_button("prev", IconName::ChevronLeft, self.model.prev_page()))
                    .child(self.nav_button("next", IconName::ChevronRight, self.model.next_page())),
            )
    }
}
