//! Modal Component
//!
//! Overlay panel with a title bar and close button. Either a centered dialog
//! over a backdrop or a drawer docked to the right edge.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName, Sizable};

use crate::constants::DETAILS_PANEL_WIDTH;
use crate::theme::colors::AppColors;

/// Where the modal sits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Center,
    Right,
}

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    placement: Placement,
    children: Vec<AnyElement>,
    footer: Option<AnyElement>,
    on_close: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Modal {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            placement: Placement::Center,
            children: Vec::new(),
            footer: None,
            on_close: None,
        }
    }

    /// Dock to the right edge instead of centering
    pub fn drawer(mut self) -> Self {
        self.placement = Placement::Right;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoElement>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoElement::into_any_element));
        self
    }

    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    /// Called by the close button and by clicks on the backdrop
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_close = self.on_close;
        let backdrop_close = on_close.clone();

        let header = div()
            .px_6()
            .py_4()
            .border_b_1()
            .border_color(AppColors::border())
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(16.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(AppColors::text_primary())
                    .child(self.title),
            )
            .child(
                div()
                    .id("modal-close")
                    .size(px(24.0))
                    .rounded_sm()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(AppColors::text_muted())
                    .cursor_pointer()
                    .hover(|s| s.bg(AppColors::table_row_hover()))
                    .when_some(on_close, |el, handler| {
                        el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
                    })
                    .child(Icon::new(IconName::Close).small()),
            );

        let body = div()
            .id("modal-body")
            .flex_1()
            .px_6()
            .py_4()
            .flex()
            .flex_col()
            .gap_3()
            .overflow_y_scroll()
            .children(self.children);

        let footer = self.footer.map(|footer| {
            div()
                .px_6()
                .py_3()
                .border_t_1()
                .border_color(AppColors::border())
                .flex()
                .justify_end()
                .gap_2()
                .child(footer)
        });

        let panel = div()
            .id("modal-panel")
            .occlude()
            .bg(AppColors::content_bg())
            .shadow_lg()
            .flex()
            .flex_col()
            .child(header)
            .child(body)
            .children(footer);

        let panel = match self.placement {
            Placement::Center => panel.rounded_lg().min_w(px(400.0)).max_w(px(600.0)).max_h(px(560.0)),
            Placement::Right => panel.h_full().w(px(DETAILS_PANEL_WIDTH)),
        };

        // Backdrop
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .occlude()
            .bg(AppColors::backdrop())
            .flex()
            .map(|el| match self.placement {
                Placement::Center => el.items_center().justify_center(),
                Placement::Right => el.justify_end(),
            })
            .when_some(backdrop_close, |el, handler| {
                el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            })
            .child(panel)
    }
}
