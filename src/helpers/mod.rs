//! Helper Utilities
//!
//! Formatting, platform paths and keyboard actions.

mod action;
mod format;
mod fs;

pub use action::*;
pub use format::*;
pub use fs::*;
