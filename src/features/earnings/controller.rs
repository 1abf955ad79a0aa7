//! Earnings Controller
//!
//! Turns table events and panel choices into state changes. Data-changing
//! requests go through `fetch`, which mimics a server round-trip: the table
//! shows its loading row until the change is applied.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use gpui::{App, AppContext};
use tracing::{error, info, warn};

use crate::app::entities::AppEntities;
use crate::constants::{FETCH_DELAY_MS, SAMPLE_ROW_COUNT};
use crate::domain::earnings::sample_rows;
use crate::domain::filter::DateRangePreset;
use crate::domain::row::Row;
use crate::eventing::table_event::TableEvent;
use crate::i18n::{Locale, t};
use crate::state::earnings_state::EarningsState;
use crate::state::activity_state::Outcome;
use crate::utils::config_store::{load_rows, save_settings_to, settings_path};

/// Earnings page controller
#[derive(Clone)]
pub struct EarningsController {
    entities: AppEntities,
}

impl EarningsController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Load the configured data file, or the sample set when none is configured
    pub fn load(&self, cx: &mut App) {
        let data_file = self.entities.settings.read(cx).data_file.clone();
        self.load_rows_from(data_file, cx);
    }

    fn load_rows_from(&self, path: Option<PathBuf>, cx: &mut App) {
        let earnings = self.entities.earnings.clone();
        let controller = self.clone();

        earnings.update(cx, |state, cx| {
            state.begin_fetch();
            cx.notify();
        });

        cx.spawn(async move |cx| {
            let today = Local::now().date_naive();
            let source = path.clone();
            let result = cx
                .background_executor()
                .spawn(async move {
                    match source {
                        Some(path) => load_rows(&path),
                        None => Ok(sample_rows(SAMPLE_ROW_COUNT, today)),
                    }
                })
                .await;

            let _ = cx.update(|cx| {
                let locale = controller.entities.i18n.read(cx).locale;
                match result {
                    Ok(rows) => {
                        info!(rows = rows.len(), source = ?path, "rows loaded");
                        controller.log(
                            Outcome::Done,
                            format!("{}: {}", t(locale, "log-rows-loaded"), rows.len()),
                            cx,
                        );
                        earnings.update(cx, |state, cx| {
                            state.set_rows(rows);
                            state.finish_fetch();
                            cx.notify();
                        });
                    }
                    Err(e) => {
                        error!(error = %e, source = ?path, "failed to load rows");
                        controller.log(
                            Outcome::Failed,
                            format!("{}: {e}", t(locale, "log-load-failed")),
                            cx,
                        );
                        earnings.update(cx, |state, cx| {
                            state.finish_fetch();
                            cx.notify();
                        });
                    }
                }
            });
        })
        .detach();
    }

    /// Apply `change` after the simulated round-trip
    pub fn fetch(&self, cx: &mut App, change: impl FnOnce(&mut EarningsState) + 'static) {
        let earnings = self.entities.earnings.clone();

        earnings.update(cx, |state, cx| {
            state.begin_fetch();
            cx.notify();
        });

        cx.spawn(async move |cx| {
            cx.background_executor()
                .timer(Duration::from_millis(FETCH_DELAY_MS))
                .await;

            let _ = earnings.update(cx, |state, cx| {
                change(state);
                state.finish_fetch();
                cx.notify();
            });
        })
        .detach();
    }

    /// React to an event emitted by the table
    pub fn handle_table_event(&self, event: &TableEvent, cx: &mut App) {
        info!(kind = event.kind(), "table event");
        let locale = self.entities.i18n.read(cx).locale;

        match event.clone() {
            TableEvent::PageChanged(page) => self.fetch(cx, move |s| s.set_page(page)),
            TableEvent::RowsPerPageChanged(rows_per_page) => {
                self.fetch(cx, move |s| s.set_rows_per_page(rows_per_page))
            }
            TableEvent::SortChanged(sort_by) => self.fetch(cx, move |s| s.set_sort_by(sort_by)),
            TableEvent::RowSelected(row) => self.select_row(row, cx),
            TableEvent::OpenDateFilter => self.update_state(cx, |s| s.date_filter_open = true),
            TableEvent::OpenMainFilter => self.update_state(cx, |s| s.main_filter_open = true),
            TableEvent::FileSelected(path) => {
                self.log(
                    Outcome::Done,
                    format!("{}: {}", t(locale, "log-file-selected"), path.display()),
                    cx,
                );
                if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
                    self.load_rows_from(Some(path), cx);
                } else {
                    warn!(path = %path.display(), "only JSON row files are imported");
                    self.log(Outcome::Skipped, t(locale, "log-not-json").to_string(), cx);
                }
            }
            TableEvent::Exported(path) => self.log(
                Outcome::Done,
                format!("{}: {}", t(locale, "log-exported"), path.display()),
                cx,
            ),
            TableEvent::ExportFailed(message) => self.log(
                Outcome::Failed,
                format!("{}: {message}", t(locale, "log-export-failed")),
                cx,
            ),
        }
    }

    pub fn select_row(&self, row: Row, cx: &mut App) {
        self.update_state(cx, move |s| s.select_row(row));
    }

    pub fn clear_selection(&self, cx: &mut App) {
        self.update_state(cx, |s| s.clear_selection());
    }

    pub fn set_organisation(&self, organisation_id: Option<String>, cx: &mut App) {
        self.fetch(cx, move |s| s.set_organisation(organisation_id));
    }

    pub fn set_payment_method(&self, method: Option<String>, cx: &mut App) {
        self.fetch(cx, move |s| s.set_payment_method(method));
    }

    /// Apply a preset and close the date panel
    pub fn set_date_range(&self, preset: DateRangePreset, cx: &mut App) {
        self.update_state(cx, |s| s.date_filter_open = false);
        self.fetch(cx, move |s| s.set_date_range(preset));
    }

    pub fn clear_filters(&self, cx: &mut App) {
        self.fetch(cx, |s| {
            s.set_organisation(None);
            s.set_payment_method(None);
        });
    }

    pub fn close_main_filter(&self, cx: &mut App) {
        self.update_state(cx, |s| s.main_filter_open = false);
    }

    pub fn close_date_filter(&self, cx: &mut App) {
        self.update_state(cx, |s| s.date_filter_open = false);
    }

    /// Switch language and persist it
    pub fn toggle_locale(&self, cx: &mut App) {
        let locale = self.entities.i18n.update(cx, |state, cx| {
            state.toggle_locale();
            cx.notify();
            state.locale
        });

        let settings = self.entities.settings.update(cx, |settings, cx| {
            settings.locale = match locale {
                Locale::ZhCN => "zh".to_string(),
                Locale::EnUS => "en".to_string(),
            };
            cx.notify();
            settings.clone()
        });

        cx.background_executor()
            .spawn(async move {
                match settings_path().and_then(|path| save_settings_to(&path, &settings)) {
                    Ok(()) => info!(locale = %settings.locale, "settings saved"),
                    Err(e) => error!(error = %e, "failed to save settings"),
                }
            })
            .detach();
    }

    fn update_state(&self, cx: &mut App, change: impl FnOnce(&mut EarningsState)) {
        self.entities.earnings.update(cx, |state, cx| {
            change(state);
            cx.notify();
        });
    }

    /// Mark failures as seen
    pub fn acknowledge_failures(&self, cx: &mut App) {
        self.entities.activity.update(cx, |activity, cx| {
            activity.acknowledge();
            cx.notify();
        });
    }

    fn log(&self, outcome: Outcome, message: String, cx: &mut App) {
        self.entities.activity.update(cx, |activity, cx| {
            activity.record_now(outcome, message);
            cx.notify();
        });
    }
}
