//! Colors - App Theme Colors

use gpui::{Rgba, rgb, rgba};

/// App color palette - All colors are accessed via associated functions
pub struct AppColors;

impl AppColors {
    // Primary colors
    /// Accent - Green (action links, active arrows)
    pub fn accent() -> Rgba { rgb(0x61892f) }
    /// Accent hover
    pub fn accent_hover() -> Rgba { rgb(0x4d6f22) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Backdrop behind panels
    pub fn backdrop() -> Rgba { rgba(0x00000066) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x61892f) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary button hover
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }
    /// Ghost button hover
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xfafafa) }
    /// Highlighted (selected) row
    pub fn table_row_selected() -> Rgba { rgb(0xe8f0dc) }
    /// Filter count badge
    pub fn badge_bg() -> Rgba { rgb(0x61892f) }
}
