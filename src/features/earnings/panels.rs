//! Earnings Panels
//!
//! The three views the page hands to the table as slots. Each renders nothing
//! while closed.

use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::Button;
use crate::domain::filter::DateRangePreset;
use crate::domain::row::display_value;
use crate::features::earnings::controller::EarningsController;
use crate::i18n::t;
use crate::theme::colors::AppColors;
use crate::utils::format::capitalize_words;

fn section_title(text: SharedString) -> impl IntoElement {
    div()
        .text_size(px(12.0))
        .font_weight(gpui::FontWeight::SEMIBOLD)
        .text_color(AppColors::text_secondary())
        .child(text)
}

fn choice_row() -> gpui::Div {
    div().flex().flex_wrap().gap_2()
}

/// Organisation and payment method filters
pub struct MainFilterPanel {
    entities: AppEntities,
    controller: EarningsController,
}

impl MainFilterPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.earnings, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify()).detach();

        Self {
            controller: EarningsController::new(entities.clone()),
            entities,
        }
    }
}

impl Render for MainFilterPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let state = self.entities.earnings.read(cx);
        if !state.main_filter_open {
            return div().into_any_element();
        }

        let selected_org = state.filters.organisation_id.clone();
        let selected_method = state.filters.payment_method.clone();
        let organisations = state.organisations().to_vec();
        let methods = state.payment_methods();

        let any_org = {
            let controller = self.controller.clone();
            Button::secondary("org-any", t(locale, "filter-any"))
                .selected(selected_org.is_none())
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    controller.set_organisation(None, cx);
                })
        };
        let org_buttons = organisations.into_iter().map(|org| {
            let controller = self.controller.clone();
            let selected = selected_org.as_deref() == Some(org.id.as_str());
            let id = org.id.clone();
            Button::secondary(SharedString::from(format!("org-{}", org.id)), org.name)
                .selected(selected)
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    controller.set_organisation(Some(id.clone()), cx);
                })
        });

        let any_method = {
            let controller = self.controller.clone();
            Button::secondary("method-any", t(locale, "filter-any"))
                .selected(selected_method.is_none())
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    controller.set_payment_method(None, cx);
                })
        };
        let method_buttons = methods.into_iter().map(|method| {
            let controller = self.controller.clone();
            let selected = selected_method.as_deref() == Some(method.as_str());
            let value = method.clone();
            Button::secondary(SharedString::from(format!("method-{method}")), capitalize_words(&method))
                .selected(selected)
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    controller.set_payment_method(Some(value.clone()), cx);
                })
        });

        let clear = {
            let controller = self.controller.clone();
            Button::ghost("filter-clear", t(locale, "action-clear")).on_click(
                move |_event: &ClickEvent, _window, cx| controller.clear_filters(cx),
            )
        };
        let done = {
            let controller = self.controller.clone();
            Button::primary("filter-done", t(locale, "action-close")).on_click(
                move |_event: &ClickEvent, _window, cx| controller.close_main_filter(cx),
            )
        };

        let controller = self.controller.clone();
        Modal::new(t(locale, "filter-title"))
            .on_close(move |_window, cx| controller.close_main_filter(cx))
            .child(section_title(t(locale, "filter-organisation")))
            .child(choice_row().child(any_org).children(org_buttons))
            .child(section_title(t(locale, "filter-payment-method")))
            .child(choice_row().child(any_method).children(method_buttons))
            .footer(div().flex().gap_2().child(clear).child(done))
            .into_any_element()
    }
}

/// Date range presets
pub struct DateFilterPanel {
    entities: AppEntities,
    controller: EarningsController,
}

impl DateFilterPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.earnings, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify()).detach();

        Self {
            controller: EarningsController::new(entities.clone()),
            entities,
        }
    }
}

impl Render for DateFilterPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let state = self.entities.earnings.read(cx);
        if !state.date_filter_open {
            return div().into_any_element();
        }

        let today = state.today();
        let current = state.date_range;

        let presets = DateRangePreset::ALL.into_iter().map(|preset| {
            let controller = self.controller.clone();
            let range = preset.label(today);
            let label = if range.is_empty() {
                t(locale, preset.i18n_key()).to_string()
            } else {
                format!("{} ({range})", t(locale, preset.i18n_key()))
            };
            Button::secondary(SharedString::from(preset.i18n_key()), label)
                .selected(preset == current)
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    controller.set_date_range(preset, cx);
                })
        });

        let controller = self.controller.clone();
        Modal::new(t(locale, "date-filter-title"))
            .on_close(move |_window, cx| controller.close_date_filter(cx))
            .child(div().flex().flex_col().gap_2().children(presets))
            .into_any_element()
    }
}

/// Field/value list of the selected row
pub struct RowDetailsPanel {
    entities: AppEntities,
    controller: EarningsController,
}

impl RowDetailsPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.earnings, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify()).detach();

        Self {
            controller: EarningsController::new(entities.clone()),
            entities,
        }
    }
}

impl Render for RowDetailsPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let Some(row) = self.entities.earnings.read(cx).selected_row.clone() else {
            return div().into_any_element();
        };

        let fields = row.fields().map(|(name, value)| {
            div()
                .flex()
                .flex_col()
                .gap_1()
                .pb_2()
                .border_b_1()
                .border_color(AppColors::border())
                .child(
                    div()
                        .text_size(px(11.0))
                        .text_color(AppColors::text_muted())
                        .child(capitalize_words(&name.replace('_', " "))),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(AppColors::text_primary())
                        .child(display_value(value)),
                )
        });

        let controller = self.controller.clone();
        Modal::new(t(locale, "details-title"))
            .drawer()
            .on_close(move |_window, cx| controller.clear_selection(cx))
            .children(fields)
            .into_any_element()
    }
}
