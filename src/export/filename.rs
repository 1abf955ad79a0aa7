//! ExportFilename - Derived CSV Filename
//!
//! `{prefix}{suffix}.csv`, where the prefix names the filtered organisation
//! and the suffix is the active date range or the span of the rows' periods.

use tracing::{debug, warn};

use crate::domain::earnings::{END_DATE_FIELD, START_DATE_FIELD};
use crate::domain::filter::FilterContext;
use crate::domain::row::Row;
use crate::utils::format::{format_ymd, parse_date};

/// Filename state, recomputed whenever the rows change.
///
/// The suffix is sticky: with no active range and no rows it keeps the last
/// computed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportFilename {
    prefix: String,
    suffix: String,
}

impl ExportFilename {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Full filename including the `.csv` extension, safe to join onto a
    /// directory
    pub fn filename(&self) -> String {
        format!("{}{}.csv", file_safe(&self.prefix), file_safe(&self.suffix))
    }

    /// Recompute prefix and suffix
    pub fn recompute(&mut self, rows: &[Row], active_date_range: &str, context: &FilterContext) {
        self.prefix = organisation_prefix(context);

        if !active_date_range.trim().is_empty() {
            self.suffix = active_date_range.to_string();
            return;
        }

        if rows.is_empty() {
            return;
        }

        match period_span(rows) {
            Some(suffix) => self.suffix = suffix,
            None => warn!("no parsable period dates in {} rows, keeping export suffix", rows.len()),
        }
        debug!(filename = %self.filename(), "export filename recomputed");
    }
}

fn organisation_prefix(context: &FilterContext) -> String {
    let Some(id) = context.selected.organisation_id.as_deref() else {
        return String::new();
    };

    match context.selected_organisation() {
        Some(org) => format!("{}_", org.name),
        None => {
            warn!(organisation_id = id, "selected organisation not in list, no export prefix");
            String::new()
        }
    }
}

/// Path separators and characters Windows reserves become `_`
fn file_safe(part: &str) -> String {
    part.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// `{min start}_to_{max end}` across rows, skipping values that don't parse
fn period_span(rows: &[Row]) -> Option<String> {
    let dates = |field: &str| {
        rows.iter()
            .filter_map(move |row| {
                let raw = row.display(field);
                let parsed = parse_date(&raw);
                if parsed.is_none() {
                    warn!(field, value = %raw, "skipping unparsable date");
                }
                parsed
            })
            .collect::<Vec<_>>()
    };

    let start = dates(START_DATE_FIELD).into_iter().min()?;
    let end = dates(END_DATE_FIELD).into_iter().max()?;
    Some(format!("{}_to_{}", format_ymd(start), format_ymd(end)))
}
