//! Grid Engine
//!
//! GPUI-independent grid: column schema, view state, quick filter, sort,
//! pagination, selection and CSV export over an immutable row store.

mod cell;
mod column;
mod controller;
mod engine;
mod export;
mod page_size;
mod quick_filter;
mod row_store;
mod view_state;

pub use cell::*;
pub use column::*;
pub use controller::*;
pub use engine::*;
pub use export::*;
pub use page_size::*;
pub use quick_filter::*;
pub use row_store::*;
pub use view_state::*;
