//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and describe rows, columns, sorting and filters.

pub mod column;
pub mod config;
pub mod earnings;
pub mod filter;
pub mod row;
pub mod sort;
