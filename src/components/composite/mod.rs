//! Composite Components
//!
//! Components built from primitives: the custom table and the modal panel.

pub mod custom_table;
pub mod modal;
