//! State - GPUI Entity State Modules
//!
//! Plain state structs behind the entities. Kept free of rendering so the
//! table and page logic can be tested without a window.

pub mod activity_state;
pub mod earnings_state;
pub mod i18n_state;
pub mod pagination_state;
pub mod sort_arrows;
pub mod table_state;
pub mod upload_state;
