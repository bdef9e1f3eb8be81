//! Service Layer
//!
//! Network access and the tokio bridge used to reach it from GPUI.
//!
//! ```text
//! TickerTableState ── spawn_abortable ──► TickerClient::fetch_tickers
//!        ▲                                        │
//!        └──────────── Vec<TickerRow> ◄───────────┘
//! ```

mod runtime;
mod ticker_api;

pub use runtime::*;
pub use ticker_api::*;
