//! Earnings Feature
//!
//! The parent of the custom table: owns the data, applies table events and
//! provides the filter and details panels.

pub mod controller;
pub mod page;
pub mod panels;
