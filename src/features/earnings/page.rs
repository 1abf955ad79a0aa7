//! Earnings Page
//!
//! Hosts the custom table, feeds it props from `EarningsState` and routes its
//! events to the controller.

use gpui::{
    AnyView, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription,
    Window, div, prelude::*, px,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::composite::custom_table::{CustomTable, TableSlots};
use crate::components::primitives::button::Button;
use crate::domain::column::ColumnDescriptor;
use crate::domain::earnings::earnings_columns;
use crate::eventing::table_event::TableEvent;
use crate::features::earnings::controller::EarningsController;
use crate::features::earnings::panels::{DateFilterPanel, MainFilterPanel, RowDetailsPanel};
use crate::i18n::t;
use crate::theme::colors::AppColors;
use crate::utils::format::{format_time_ms, truncate};

/// Earnings page component
pub struct EarningsPage {
    entities: AppEntities,
    controller: EarningsController,
    columns: Vec<ColumnDescriptor>,
    table: Entity<CustomTable>,
    _subscriptions: Vec<Subscription>,
}

impl EarningsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = EarningsController::new(entities.clone());
        let columns = earnings_columns();

        let (props, filter_context, export_dir, locale) = {
            let settings = entities.settings.read(cx);
            let earnings = entities.earnings.read(cx);
            (
                earnings.table_props(&settings.header_title, &columns, settings.action_button),
                earnings.filter_context(),
                settings.export_dir.clone(),
                entities.i18n.read(cx).locale,
            )
        };

        let main_filter = cx.new(|cx| MainFilterPanel::new(entities.clone(), cx));
        let date_filter = cx.new(|cx| DateFilterPanel::new(entities.clone(), cx));
        let row_details = cx.new(|cx| RowDetailsPanel::new(entities.clone(), cx));

        let table = cx.new(|cx| {
            let mut table = CustomTable::new(props, filter_context, cx);
            table.set_export_dir(export_dir);
            table.set_locale(locale, cx);
            table.set_slots(
                TableSlots {
                    main_filter: Some(AnyView::from(main_filter)),
                    date_filter: Some(AnyView::from(date_filter)),
                    row_details: Some(AnyView::from(row_details)),
                },
                cx,
            );
            table
        });

        let mut subscriptions = Vec::new();

        // Table events go to the controller
        let event_controller = controller.clone();
        subscriptions.push(cx.subscribe(&table, move |_this, _table, event: &TableEvent, cx| {
            event_controller.handle_table_event(event, cx);
        }));

        // Push new props whenever the earnings state changes
        subscriptions.push(cx.observe(&entities.earnings, |this, _, cx| {
            this.sync_table(cx);
        }));

        // Observe i18n changes
        subscriptions.push(cx.observe(&entities.i18n, |this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            this.table.update(cx, |table, cx| table.set_locale(locale, cx));
            cx.notify();
        }));

        subscriptions.push(cx.observe(&entities.activity, |_this, _, cx| cx.notify()));

        controller.load(cx);

        Self {
            entities,
            controller,
            columns,
            table,
            _subscriptions: subscriptions,
        }
    }

    fn sync_table(&mut self, cx: &mut Context<Self>) {
        let (props, filter_context) = {
            let settings = self.entities.settings.read(cx);
            let earnings = self.entities.earnings.read(cx);
            (
                earnings.table_props(&settings.header_title, &self.columns, settings.action_button),
                earnings.filter_context(),
            )
        };
        debug!(rows = props.rows.len(), total = props.total_count, "syncing table props");

        self.table.update(cx, |table, cx| {
            table.set_filter_context(filter_context, cx);
            table.set_props(props, cx);
        });
    }

    fn render_status_bar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (latest, failures) = {
            let activity = self.entities.activity.read(cx);
            (activity.latest().cloned(), activity.unseen_failures())
        };
        let controller = self.controller.clone();
        let ack_controller = self.controller.clone();

        div()
            .h(px(32.0))
            .w_full()
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(AppColors::border())
            .bg(AppColors::content_bg())
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .text_size(px(12.0))
                    .when(failures > 0, |el| {
                        el.child(
                            Button::ghost(
                                "ack-failures",
                                format!("{failures} {}", t(locale, "status-failures")),
                            )
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                ack_controller.acknowledge_failures(cx);
                            }),
                        )
                    })
                    .when_some(latest, |el, entry| {
                        el.child(
                            div()
                                .text_color(AppColors::text_muted())
                                .child(format_time_ms(&entry.at)),
                        )
                        .child(
                            div()
                                .text_color(entry.outcome.color())
                                .child(entry.outcome.label()),
                        )
                        .child(
                            div()
                                .text_color(AppColors::text_primary())
                                .child(truncate(&entry.message, 120)),
                        )
                    }),
            )
            .child(
                Button::ghost(
                    "toggle-locale",
                    format!("{}: {}", t(locale, "app-language"), locale.display_name()),
                )
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    controller.toggle_locale(cx);
                }),
            )
    }
}

impl Render for EarningsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(AppColors::background())
            .child(div().flex_1().overflow_hidden().child(self.table.clone()))
            .child(self.render_status_bar(cx))
    }
}
