//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on services or do I/O, apart from
//! the table's own export and file picker.

pub mod composite;
pub mod primitives;
