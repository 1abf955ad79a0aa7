//! FileInput - Upload Control Value
//!
//! Mirrors a file input: picking files sets its value, and the value is
//! cleared right after the selection is reported so picking the same file
//! again reports it again.

use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct FileInput {
    value: Option<PathBuf>,
}

impl FileInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value (always empty between selections)
    pub fn value(&self) -> Option<&PathBuf> {
        self.value.as_ref()
    }

    /// Handle a picker result and return the file to report, if any.
    /// Only the first file counts.
    pub fn select(&mut self, files: Vec<PathBuf>) -> Option<PathBuf> {
        self.value = files.into_iter().next();
        // reset so the next identical pick still fires
        self.value.take()
    }
}
