//! Filter - Organisations, Selected Filters and Date Presets

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An organisation rows can be filtered by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    pub id: String,
    pub name: String,
}

impl Organisation {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Filters currently applied by the parent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFilters {
    pub organisation_id: Option<String>,
    pub payment_method: Option<String>,
}

impl SelectedFilters {
    /// Number of active filters (drives the filter badge)
    pub fn active_count(&self) -> usize {
        [self.organisation_id.is_some(), self.payment_method.is_some()]
            .into_iter()
            .filter(|active| *active)
            .count()
    }
}

/// Read-only context handed to the table for the export filename prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterContext {
    pub organisations: Vec<Organisation>,
    pub selected: SelectedFilters,
}

impl FilterContext {
    pub fn new(organisations: Vec<Organisation>, selected: SelectedFilters) -> Self {
        Self {
            organisations,
            selected,
        }
    }

    /// The organisation named by the selected filters, if it is known
    pub fn selected_organisation(&self) -> Option<&Organisation> {
        let id = self.selected.organisation_id.as_deref()?;
        self.organisations.iter().find(|org| org.id == id)
    }
}

/// Date range presets offered by the date filter panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateRangePreset {
    #[default]
    All,
    Last7Days,
    Last30Days,
    ThisMonth,
}

impl DateRangePreset {
    pub const ALL: [DateRangePreset; 4] = [
        DateRangePreset::All,
        DateRangePreset::Last7Days,
        DateRangePreset::Last30Days,
        DateRangePreset::ThisMonth,
    ];

    /// i18n key of the preset name
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DateRangePreset::All => "date-all",
            DateRangePreset::Last7Days => "date-last-7",
            DateRangePreset::Last30Days => "date-last-30",
            DateRangePreset::ThisMonth => "date-this-month",
        }
    }

    /// Inclusive date bounds relative to `today`
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            DateRangePreset::All => None,
            DateRangePreset::Last7Days => Some((today - Duration::days(6), today)),
            DateRangePreset::Last30Days => Some((today - Duration::days(29), today)),
            DateRangePreset::ThisMonth => {
                let first = today.with_day(1).unwrap_or(today);
                Some((first, today))
            }
        }
    }

    /// Label shown on the date-range button, e.g. `Oct 1 - Oct 5`. Empty for `All`.
    pub fn label(&self, today: NaiveDate) -> String {
        match self.bounds(today) {
            Some((start, end)) => format!("{} - {}", start.format("%b %-d"), end.format("%b %-d")),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn active_count_counts_set_filters() {
        let mut filters = SelectedFilters::default();
        assert_eq!(filters.active_count(), 0);
        filters.organisation_id = Some("2".into());
        assert_eq!(filters.active_count(), 1);
        filters.payment_method = Some("mpesa".into());
        assert_eq!(filters.active_count(), 2);
    }

    #[test]
    fn selected_organisation_requires_known_id() {
        let orgs = vec![Organisation::new("1", "Acme"), Organisation::new("2", "Globex")];
        let ctx = FilterContext::new(
            orgs.clone(),
            SelectedFilters {
                organisation_id: Some("2".into()),
                ..Default::default()
            },
        );
        assert_eq!(ctx.selected_organisation().map(|o| o.name.as_str()), Some("Globex"));

        let unknown = FilterContext::new(
            orgs,
            SelectedFilters {
                organisation_id: Some("9".into()),
                ..Default::default()
            },
        );
        assert!(unknown.selected_organisation().is_none());
    }

    #[test]
    fn preset_labels() {
        let today = date(2021, 10, 5);
        assert_eq!(DateRangePreset::All.label(today), "");
        assert_eq!(DateRangePreset::ThisMonth.label(today), "Oct 1 - Oct 5");
        assert_eq!(DateRangePreset::Last7Days.label(today), "Sep 29 - Oct 5");
    }
}
