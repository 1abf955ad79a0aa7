//! Header Bar
//!
//! Title on the left; date range, filter and the export or upload action on
//! the right.

use gpui::{
    App, ClickEvent, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use super::upload_action::UploadAction;
use crate::assets::CustomIconName;
use crate::components::primitives::button::Button;
use crate::domain::config::ActionButtonType;
use crate::i18n::{Locale, t};
use crate::state::table_state::HeaderModel;
use crate::theme::colors::AppColors;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct HeaderBar {
    model: HeaderModel,
    locale: Locale,
    exporting: bool,
    on_date_range: Option<ClickHandler>,
    on_filter: Option<ClickHandler>,
    on_export: Option<ClickHandler>,
    on_upload: Option<ClickHandler>,
}

impl HeaderBar {
    pub fn new(model: HeaderModel, locale: Locale) -> Self {
        Self {
            model,
            locale,
            exporting: false,
            on_date_range: None,
            on_filter: None,
            on_export: None,
            on_upload: None,
        }
    }

    /// Disable the export link while a write is running
    pub fn exporting(mut self, exporting: bool) -> Self {
        self.exporting = exporting;
        self
    }

    pub fn on_date_range(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_date_range = Some(Box::new(handler));
        self
    }

    pub fn on_filter(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_filter = Some(Box::new(handler));
        self
    }

    pub fn on_export(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_export = Some(Box::new(handler));
        self
    }

    pub fn on_upload(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_upload = Some(Box::new(handler));
        self
    }
}

fn with_handler(button: Button, handler: Option<ClickHandler>) -> Button {
    match handler {
        Some(handler) => button.on_click(handler),
        None => button,
    }
}

impl RenderOnce for HeaderBar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let locale = self.locale;
        let range: SharedString = self
            .model
            .date_range
            .clone()
            .map(SharedString::from)
            .unwrap_or_else(|| t(locale, "table-all"));

        let date_button = with_handler(
            Button::ghost(
                "table-date-range",
                format!("{}: {}", t(locale, "table-date-range"), range),
            )
            .icon(CustomIconName::Calendar),
            self.on_date_range,
        );

        let filter_button = with_handler(
            Button::ghost("table-filter", t(locale, "table-filter"))
                .icon(CustomIconName::Filter)
                .badge(self.model.filter_badge.clone()),
            self.on_filter,
        );

        let action = match self.model.action {
            ActionButtonType::Export => with_handler(
                Button::ghost("table-export", t(locale, "action-export"))
                    .icon(CustomIconName::Download)
                    .disabled(self.exporting),
                self.on_export,
            )
            .into_any_element(),
            ActionButtonType::Upload => {
                let upload = UploadAction::new(t(locale, "action-upload"));
                match self.on_upload {
                    Some(handler) => upload.on_pick(handler),
                    None => upload,
                }
                .into_any_element()
            }
        };

        div()
            .w_full()
            .h(px(56.0))
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(20.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(AppColors::text_primary())
                    .child(self.model.title.clone()),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(date_button)
                    .child(filter_button)
                    .when(self.model.action == ActionButtonType::Export, |el| {
                        el.child(
                            div()
                                .text_size(px(11.0))
                                .text_color(AppColors::text_muted())
                                .child(self.model.export_filename.clone()),
                        )
                    })
                    .child(action),
            )
    }
}
