//! Earnings GUI Library
//!
//! A native earnings dashboard built around a reusable table component:
//! sortable headers, pagination above and below the rows, CSV export with a
//! derived filename, file upload and slots for filter and details panels.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod export;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod utils;
