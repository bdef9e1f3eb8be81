//! Application Constants
//!
//! Centralized constants for the ticker endpoint, paging, and window layout.

/// Public 24h ticker snapshot endpoint
pub const TICKER_ENDPOINT: &str = "https://data.binance.com/api/v3/ticker/24hr";

/// Request timeout for the ticker fetch
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Selectable page sizes, in display order
pub const PAGE_SIZE_OPTIONS: [usize; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Page size used before the user picks one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default column width hint in pixels
pub const DEFAULT_COLUMN_WIDTH: f32 = 300.0;

/// Width of the selection checkbox gutter
pub const CHECKBOX_COLUMN_WIDTH: f32 = 36.0;

/// Grid row and header heights
pub const GRID_ROW_HEIGHT: f32 = 36.0;
pub const GRID_HEADER_HEIGHT: f32 = 40.0;
pub const GRID_HEIGHT: f32 = 500.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Output placeholder for timestamps outside the representable range
pub const INVALID_DATE: &str = "Invalid Date";

/// File name prefix for CSV exports
pub const EXPORT_FILE_PREFIX: &str = "tickers";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "ticker-table.toml";
