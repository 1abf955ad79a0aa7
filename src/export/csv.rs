//! CSV Export
//!
//! Projects rows onto a fixed set of fields and encodes them as CSV. Every
//! field is double-quoted, embedded quotes are doubled, missing or null values
//! become empty fields and records end with `\n`.

use std::path::{Path, PathBuf};

use crate::domain::row::{Row, display_value};
use crate::error::{Error, Result};

/// One exported column: where the value comes from and what the header says
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportField {
    pub source: &'static str,
    pub header: &'static str,
}

impl ExportField {
    pub const fn renamed(source: &'static str, header: &'static str) -> Self {
        Self { source, header }
    }

    pub const fn same(name: &'static str) -> Self {
        Self {
            source: name,
            header: name,
        }
    }
}

/// Fields written by the earnings export, in output order
pub const EARNINGS_EXPORT_FIELDS: [ExportField; 9] = [
    ExportField::renamed("id", "earnings_id"),
    ExportField::same("worker_id"),
    ExportField::same("phone"),
    ExportField::same("currency"),
    ExportField::same("amount"),
    ExportField::same("captures_count"),
    ExportField::same("payment_confirmation_id"),
    ExportField::same("payment_method"),
    ExportField::same("paid_at"),
];

/// Encode `rows` projected onto `fields`, header line first
pub fn encode(rows: &[Row], fields: &[ExportField]) -> Result<String> {
    let mut writer = ::csv::WriterBuilder::new()
        .quote_style(::csv::QuoteStyle::Always)
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(fields.iter().map(|f| f.header))?;
    for row in rows {
        writer.write_record(
            fields
                .iter()
                .map(|f| row.get(f.source).map(display_value).unwrap_or_default()),
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io { source: e.into_error() })?;
    String::from_utf8(bytes).map_err(|e| Error::Invalid {
        message: format!("csv output is not utf-8: {e}"),
    })
}

/// Write the earnings CSV for `rows` into `dir/filename`.
///
/// `filename` must be a bare file name; anything that would leave `dir` is
/// rejected.
pub async fn write_export(dir: &Path, filename: &str, rows: &[Row]) -> Result<PathBuf> {
    let name = Path::new(filename);
    if name.file_name() != Some(name.as_os_str()) {
        return Err(Error::Invalid {
            message: format!("export filename {filename:?} is not a plain file name"),
        });
    }

    let path = dir.join(name);
    let body = encode(rows, &EARNINGS_EXPORT_FIELDS)?;

    smol::fs::write(&path, body)
        .await
        .map_err(|source| Error::Export {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn earning(id: u64) -> Row {
        Row::new()
            .with("id", id)
            .with("worker_id", "W-1")
            .with("phone", "+254700000000")
            .with("currency", "KES")
            .with("amount", 120.5)
            .with("captures_count", 12)
            .with("payment_confirmation_id", "PC1")
            .with("payment_method", "mobile money")
            .with("paid_at", Value::Null)
            .with("csv_start_date", "2021-10-01")
    }

    #[test]
    fn projects_fixed_field_subset() {
        let csv = encode(&[earning(7)], &EARNINGS_EXPORT_FIELDS).expect("encode");
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "\"earnings_id\",\"worker_id\",\"phone\",\"currency\",\"amount\",\"captures_count\",\"payment_confirmation_id\",\"payment_method\",\"paid_at\""
        );
        assert_eq!(
            lines[1],
            "\"7\",\"W-1\",\"+254700000000\",\"KES\",\"120.5\",\"12\",\"PC1\",\"mobile money\",\"\""
        );
        assert!(!csv.contains("csv_start_date"));
    }

    #[test]
    fn quotes_are_doubled_and_missing_fields_are_empty() {
        let row = Row::new().with("id", 1).with("worker_id", "say \"hi\", ok");
        let csv = encode(&[row], &[ExportField::same("worker_id"), ExportField::same("phone")])
            .expect("encode");
        assert_eq!(csv, "\"worker_id\",\"phone\"\n\"say \"\"hi\"\", ok\",\"\"\n");
    }

    #[test]
    fn empty_rows_still_write_header() {
        let csv = encode(&[], &EARNINGS_EXPORT_FIELDS).expect("encode");
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn writes_file_into_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = smol::block_on(write_export(dir.path(), "Acme_2021-10-01_to_2021-10-05.csv", &[earning(1)]))
            .expect("export");

        assert_eq!(path, dir.path().join("Acme_2021-10-01_to_2021-10-05.csv"));
        let written = std::fs::read_to_string(&path).expect("read");
        assert_eq!(written.lines().count(), 2);
    }

    #[test]
    fn missing_directory_is_an_export_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");
        let err = smol::block_on(write_export(&missing, "x.csv", &[])).expect_err("should fail");
        assert!(matches!(err, Error::Export { .. }));
    }

    #[test]
    fn filename_with_separators_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["../escape.csv", "Trees/For Life.csv", ".."] {
            let err = smol::block_on(write_export(dir.path(), name, &[])).expect_err(name);
            assert!(matches!(err, Error::Invalid { .. }), "{name}");
        }
        assert!(!dir.path().join("Trees").exists());
    }
}
