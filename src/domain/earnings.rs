//! Earnings - Worker Earnings Table Data
//!
//! Column metadata for the earnings table plus a deterministic sample set
//! used when no data file is configured.

use chrono::{Duration, NaiveDate};

use super::column::ColumnDescriptor;
use super::filter::Organisation;
use super::row::Row;

/// Field holding the start of a row's consolidation period
pub const START_DATE_FIELD: &str = "csv_start_date";
/// Field holding the end of a row's consolidation period
pub const END_DATE_FIELD: &str = "csv_end_date";
/// Field the parent filters organisations by
pub const ORGANISATION_FIELD: &str = "organisation_id";
/// Field the parent filters payment methods by
pub const PAYMENT_METHOD_FIELD: &str = "payment_method";

/// Columns of the earnings table
pub fn earnings_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("worker_id", "Worker").fixed_width(110.0),
        ColumnDescriptor::new("phone", "Phone").fixed_width(140.0),
        ColumnDescriptor::new("amount", "Amount").sortable().fixed_width(100.0),
        ColumnDescriptor::new("currency", "Currency").fixed_width(90.0),
        ColumnDescriptor::new("captures_count", "Captures")
            .sortable()
            .info_icon()
            .fixed_width(110.0),
        ColumnDescriptor::new("payment_method", "Method").fixed_width(120.0),
        ColumnDescriptor::new("csv_start_date", "Period Start").sortable().fixed_width(130.0),
        ColumnDescriptor::new("paid_at", "Paid At").sortable().fixed_width(130.0),
    ]
}

/// Organisations referenced by the sample rows
pub fn sample_organisations() -> Vec<Organisation> {
    vec![
        Organisation::new("1", "Greenstand"),
        Organisation::new("2", "Freetown Planters"),
        Organisation::new("3", "Kilimanjaro Growers"),
    ]
}

/// Deterministic sample earnings ending at `today`
pub fn sample_rows(count: usize, today: NaiveDate) -> Vec<Row> {
    const METHODS: [&str; 3] = ["mobile money", "bank transfer", "cash"];
    const CURRENCIES: [&str; 2] = ["KES", "SLL"];

    (0..count)
        .map(|i| {
            let end = today - Duration::days((i % 45) as i64);
            let start = end - Duration::days(6);
            let paid = end + Duration::days(2);
            let org = (i % 3) + 1;
            let amount = 150 + ((i * 37) % 400) as i64;
            let captures = 10 + (i * 13) % 90;
            let paid_at = if i % 4 == 0 {
                serde_json::Value::Null
            } else {
                paid.format("%Y-%m-%d").to_string().into()
            };

            Row::new()
                .with("id", (i + 1) as u64)
                .with("worker_id", format!("W-{:04}", 100 + i * 7))
                .with(ORGANISATION_FIELD, org.to_string())
                .with("phone", format!("+2547{:08}", 12_345_678 + i * 1_111))
                .with("currency", CURRENCIES[i % CURRENCIES.len()])
                .with("amount", amount)
                .with("captures_count", captures as u64)
                .with("payment_confirmation_id", format!("PC{:06}", 500_000 + i))
                .with(PAYMENT_METHOD_FIELD, METHODS[i % METHODS.len()])
                .with("paid_at", paid_at)
                .with(START_DATE_FIELD, start.format("%Y-%m-%d").to_string())
                .with(END_DATE_FIELD, end.format("%Y-%m-%d").to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rows_have_unique_ids_and_periods() {
        let today = NaiveDate::from_ymd_opt(2021, 10, 5).expect("date");
        let rows = sample_rows(20, today);
        assert_eq!(rows.len(), 20);

        let mut ids: Vec<String> = rows.iter().filter_map(Row::id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 20);

        assert!(rows.iter().all(|r| !r.display(START_DATE_FIELD).is_empty()));
        assert_eq!(rows[0].display(END_DATE_FIELD), "2021-10-05");
    }

    #[test]
    fn sortable_columns_exist_in_rows() {
        let today = NaiveDate::from_ymd_opt(2021, 10, 5).expect("date");
        let row = &sample_rows(1, today)[0];
        for column in earnings_columns() {
            assert!(row.get(&column.name).is_some(), "missing {}", column.name);
        }
    }
}
