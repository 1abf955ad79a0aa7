//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Page sizes offered by the pagination control
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [20, 50, 100];

/// Page size used when settings don't name a valid one
pub const DEFAULT_ROWS_PER_PAGE: usize = 20;

/// Table row height in pixels
pub const ROW_HEIGHT: f32 = 36.0;

/// Table header height in pixels
pub const HEADER_HEIGHT: f32 = 40.0;

/// Width used for columns without a fixed width
pub const FLEX_COLUMN_MIN_WIDTH: f32 = 100.0;

/// Row details panel width
pub const DETAILS_PANEL_WIDTH: f32 = 360.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Number of sample rows generated when no data file is configured
pub const SAMPLE_ROW_COUNT: usize = 137;

/// Simulated fetch latency of the earnings page
pub const FETCH_DELAY_MS: u64 = 250;

/// File name of the settings file inside the config directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Prefix of the rolling log file inside the data directory
pub const LOG_FILE_PREFIX: &str = "earnings-gui.log";
