//! ColumnDescriptor - Table Column Metadata

use serde::{Deserialize, Serialize};

/// One table column. Immutable for the lifetime of a render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Field key looked up in each row
    pub name: String,
    /// Header label
    pub description: String,
    /// Whether clicking the header requests a sort
    #[serde(default)]
    pub sortable: bool,
    /// Show an info marker next to the label
    #[serde(default)]
    pub show_info_icon: bool,
    /// Fixed width in pixels (flexible when unset)
    #[serde(default)]
    pub width: Option<f32>,
}

impl ColumnDescriptor {
    /// Create a non-sortable column
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            sortable: false,
            show_info_icon: false,
            width: None,
        }
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Show the info icon
    pub fn info_icon(mut self) -> Self {
        self.show_info_icon = true;
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }
}
