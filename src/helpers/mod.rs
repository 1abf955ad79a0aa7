//! Helper Utilities
//!
//! Directory lookups shared by settings, logging and export.

mod fs;

pub use fs::*;
