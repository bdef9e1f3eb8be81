//! View Components
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Title, Toggle, page size, quick filter                      │
//! │ ┌─────────────────────────────────────────────────────────┐ │
//! │ │                     TickerGrid                           │ │
//! │ └─────────────────────────────────────────────────────────┘ │
//! │  Export, status                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod ticker_grid;
mod ticker_table;
mod title_bar;

pub use ticker_grid::*;
pub use ticker_table::*;
pub use title_bar::*;
