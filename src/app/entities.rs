//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: the earnings data changes on every
//! table interaction, the locale and settings almost never.

use chrono::Local;
use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::AppSettings;
use crate::domain::earnings::sample_organisations;
use crate::state::{
    activity_state::ActivityState, earnings_state::EarningsState, i18n_state::I18nState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Settings loaded at startup
    pub settings: Entity<AppSettings>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Outcomes shown in the status strip
    pub activity: Entity<ActivityState>,
    /// Earnings rows, filters, sort and paging
    pub earnings: Entity<EarningsState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Create all entities. Rows start empty and are loaded by the page controller.
    pub fn init(settings: AppSettings, cx: &mut App) -> Self {
        let today = Local::now().date_naive();
        let rows_per_page = settings.rows_per_page;

        Self {
            i18n: cx.new(|_| I18nState::from_tag(&settings.locale)),
            activity: cx.new(|_| ActivityState::default()),
            earnings: cx.new(|_| {
                EarningsState::new(Vec::new(), sample_organisations(), rows_per_page, today)
            }),
            settings: cx.new(|_| settings),
        }
    }
}
