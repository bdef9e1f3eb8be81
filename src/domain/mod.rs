//! Domain - Pure Data Structures and Table Logic
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod config;
pub mod schema;
pub mod table;
pub mod ticker;
