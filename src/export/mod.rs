//! Export - CSV Documents and Their Filenames

pub mod csv;
pub mod filename;

pub use self::csv::{EARNINGS_EXPORT_FIELDS, ExportField, encode, write_export};
pub use filename::ExportFilename;
