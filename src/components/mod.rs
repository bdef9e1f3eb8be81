//! Reusable UI Components
//!
//! Small stateless elements shared by the views.

mod checkbox;
mod pagination;

pub use checkbox::*;
pub use pagination::*;
