//! State Management Layer
//!
//! Application state using GPUI's Entity system. Data flows one way:
//!
//! ```text
//! UI Action → State Method → spawn Service Call → State Update → notify → UI Refresh
//! ```

mod app;
mod i18n;
mod ticker_table;
mod ui_event;

pub use app::*;
pub use i18n::*;
pub use ticker_table::*;
pub use ui_event::*;
