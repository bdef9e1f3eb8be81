//! Table - Ticker Table Handlers
//!
//! The ticker table's load lifecycle and its interaction handlers. Handlers
//! only issue commands through [`GridController`]; the loaded rows are never
//! rewritten.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::schema::{TICKER_COLUMNS, TOGGLE_COLUMNS};
use crate::domain::ticker::{TickerField, TickerRow};
use crate::error::Result;
use crate::grid::{ColumnToggle, CsvDocument, GridController, GridModel, PageSize};

/// Ticker load state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Rows are in the grid
    Loaded,
    /// Last request failed
    Error(Arc<str>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// Get error message if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Ticker table over a grid
pub struct TickerTable<G = GridModel<TickerRow>> {
    grid: G,
    toggle: ColumnToggle,
    load_state: LoadState,
}

impl TickerTable {
    /// Ticker table on the in-crate grid with the given page size
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self::new(GridModel::new(&TICKER_COLUMNS).with_page_size(page_size))
    }
}

impl<G> TickerTable<G>
where
    G: GridController<Row = TickerRow, Field = TickerField>,
{
    pub fn new(grid: G) -> Self {
        Self {
            grid,
            toggle: ColumnToggle::default(),
            load_state: LoadState::Idle,
        }
    }

    // ==================== Getters ====================

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Whether the toggle currently hides its columns
    pub fn columns_hidden(&self) -> bool {
        self.toggle.is_hidden()
    }

    // ==================== Loading ====================

    /// Mark a load as started
    ///
    /// Returns false when a load is already in flight or rows are loaded,
    /// so at most one request is ever outstanding.
    pub fn begin_load(&mut self) -> bool {
        match self.load_state {
            LoadState::Idle | LoadState::Error(_) => {
                self.load_state = LoadState::Loading;
                true
            }
            LoadState::Loading | LoadState::Loaded => false,
        }
    }

    /// Apply the outcome of a load
    pub fn finish_load(&mut self, result: Result<Vec<TickerRow>>) {
        match result {
            Ok(rows) => {
                info!(rows = rows.len(), "Ticker rows loaded");
                self.grid.load_rows(rows);
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                error!(error = %e, "Failed to load tickers");
                self.load_state = LoadState::Error(e.to_string().into());
            }
        }
    }

    // ==================== Handlers ====================

    /// Flip visibility of the Symbol and Price Change columns
    ///
    /// Returns the visibility that was applied.
    pub fn toggle_columns(&mut self) -> bool {
        let (toggle, visible) = self.toggle.toggled();
        self.grid.set_columns_visible(&TOGGLE_COLUMNS, visible);
        self.toggle = toggle;
        visible
    }

    /// Change rows per page from a selector value
    pub fn change_page_size(&mut self, requested: &str) -> Result<PageSize> {
        let size: PageSize = requested.parse()?;
        self.grid.set_page_size(size);
        Ok(size)
    }

    pub fn apply_quick_filter(&mut self, text: &str) {
        self.grid.set_quick_filter(text);
    }

    /// Snapshot of the current view for CSV export
    pub fn export_csv(&self) -> CsvDocument {
        self.grid.export_csv()
    }

    /// Emit the selected rows as JSON to the log, returning how many there were
    pub fn log_selection(&self) -> Result<usize> {
        let rows = self.grid.selected_rows();
        let json = serde_json::to_string(&rows)?;
        info!(count = rows.len(), selection = %json, "Selection changed");
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn tickers(count: usize) -> Vec<TickerRow> {
        (0..count)
            .map(|i| TickerRow {
                symbol: format!("COIN{i:03}USDT"),
                last_price: format!("{}.5", i).as_str().into(),
                count: i as i64,
                ..Default::default()
            })
            .collect()
    }

    fn loaded(count: usize) -> TickerTable {
        let mut table = TickerTable::with_page_size(PageSize::default());
        assert!(table.begin_load());
        table.finish_load(Ok(tickers(count)));
        table
    }

    /// Grid that records the commands it receives
    #[derive(Default)]
    struct RecordingGrid {
        visibility: Vec<(Vec<TickerField>, bool)>,
        page_sizes: Vec<usize>,
        quick_filters: Vec<String>,
        loaded: Option<usize>,
    }

    impl GridController for RecordingGrid {
        type Row = TickerRow;
        type Field = TickerField;

        fn load_rows(&mut self, rows: Vec<TickerRow>) {
            self.loaded = Some(rows.len());
        }

        fn set_columns_visible(&mut self, fields: &[TickerField], visible: bool) {
            self.visibility.push((fields.to_vec(), visible));
        }

        fn set_page_size(&mut self, size: PageSize) {
            self.page_sizes.push(size.get());
        }

        fn set_quick_filter(&mut self, text: &str) {
            self.quick_filters.push(text.to_string());
        }

        fn export_csv(&self) -> CsvDocument {
            CsvDocument::new(Vec::new(), Vec::new())
        }

        fn selected_rows(&self) -> Vec<TickerRow> {
            Vec::new()
        }
    }

    #[test]
    fn test_toggle_sends_only_toggle_columns() {
        let mut table = TickerTable::new(RecordingGrid::default());
        table.toggle_columns();
        table.toggle_columns();
        assert_eq!(
            table.grid().visibility,
            vec![(TOGGLE_COLUMNS.to_vec(), false), (TOGGLE_COLUMNS.to_vec(), true)]
        );
    }

    #[test]
    fn test_rejected_page_size_never_reaches_grid() {
        let mut table = TickerTable::new(RecordingGrid::default());
        assert!(table.change_page_size("25").is_err());
        assert!(table.change_page_size("abc").is_err());
        assert!(table.grid().page_sizes.is_empty());

        table.change_page_size("50").expect("valid");
        assert_eq!(table.grid().page_sizes, [50]);
    }

    #[test]
    fn test_load_and_filter_go_through_controller() {
        let mut table = TickerTable::new(RecordingGrid::default());
        table.finish_load(Err(Error::Invalid {
            message: "offline".to_string(),
        }));
        assert_eq!(table.grid().loaded, None);

        assert!(table.begin_load());
        table.finish_load(Ok(tickers(4)));
        assert_eq!(table.grid().loaded, Some(4));

        table.apply_quick_filter("btc usdt");
        assert_eq!(table.grid().quick_filters, ["btc usdt"]);
        assert_eq!(table.log_selection().expect("log"), 0);
    }

    #[test]
    fn test_row_count_matches_response() {
        let table = loaded(137);
        assert!(table.load_state().is_loaded());
        assert_eq!(table.grid().row_count(), 137);
    }

    #[test]
    fn test_single_load_in_flight() {
        let mut table = TickerTable::with_page_size(PageSize::default());
        assert!(table.begin_load());
        assert!(!table.begin_load());
        table.finish_load(Err(Error::Invalid {
            message: "offline".to_string(),
        }));
        assert_eq!(table.load_state().error_message(), Some("Invalid: offline"));
        assert_eq!(table.grid().row_count(), 0);

        assert!(table.begin_load());
        table.finish_load(Ok(tickers(3)));
        assert!(!table.begin_load());
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let mut table = loaded(1);
        assert!(!table.toggle_columns());
        assert!(!table.grid().is_column_visible(TickerField::Symbol));
        assert!(!table.grid().is_column_visible(TickerField::PriceChange));
        assert!(table.grid().is_column_visible(TickerField::LastPrice));

        assert!(table.toggle_columns());
        for field in TickerField::ALL {
            assert!(table.grid().is_column_visible(field));
        }
        assert!(!table.columns_hidden());
    }

    #[test]
    fn test_change_page_size() {
        let mut table = loaded(120);
        assert!(table.change_page_size("25").is_err());
        assert_eq!(table.grid().page_rows().len(), 10);

        assert_eq!(table.change_page_size("50").expect("valid").get(), 50);
        assert_eq!(table.grid().page_rows().len(), 50);

        let mut small = loaded(30);
        small.change_page_size("50").expect("valid");
        assert_eq!(small.grid().page_rows().len(), 30);
    }

    #[test]
    fn test_page_size_change_returns_to_first_page() {
        let mut table = loaded(60);
        table.grid_mut().next_page();
        table.change_page_size("20").expect("valid");
        assert_eq!(table.grid().current_page(), 0);
    }

    #[test]
    fn test_unmatched_filter_exports_header_only() {
        let mut table = loaded(20);
        table.apply_quick_filter("no-such-symbol");
        let doc = table.export_csv();
        assert!(doc.is_empty());
        assert_eq!(doc.headers().len(), 21);
        assert_eq!(doc.headers()[0], "Symbol");
    }

    #[test]
    fn test_export_skips_toggled_columns() {
        let mut table = loaded(2);
        table.toggle_columns();
        let doc = table.export_csv();
        assert_eq!(doc.headers().len(), 19);
        assert_eq!(doc.headers()[0], "Price Change Percent");
        assert_eq!(doc.records()[0][3], "0.5 €");
    }

    #[test]
    fn test_column_filters_by_kind() {
        let mut rows = tickers(12);
        rows[3].open_time = 1_700_000_000_000;
        let mut table = TickerTable::with_page_size(PageSize::default());
        table.finish_load(Ok(rows));

        // Numeric equality, not substring: 10 and 11 stay hidden
        table.grid_mut().set_column_filter(TickerField::Count, "1");
        assert_eq!(table.grid().displayed_count(), 1);
        table.grid_mut().set_column_filter(TickerField::Count, "");
        assert_eq!(table.grid().displayed_count(), 12);

        table.grid_mut().set_column_filter(TickerField::OpenTime, "November 2023");
        let shown: Vec<_> = table
            .grid()
            .page_rows()
            .into_iter()
            .map(|(_, row)| row.symbol.clone())
            .collect();
        assert_eq!(shown, ["COIN003USDT"]);

        table.grid_mut().set_column_filter(TickerField::Symbol, "coin004");
        assert_eq!(table.grid().displayed_count(), 0);
    }

    #[test]
    fn test_log_selection_is_read_only() {
        let mut table = loaded(5);
        assert_eq!(table.log_selection().expect("log"), 0);

        table.grid_mut().toggle_selected(2);
        table.grid_mut().toggle_selected(4);
        assert_eq!(table.log_selection().expect("log"), 2);
        assert_eq!(table.grid().selected_count(), 2);
        assert_eq!(table.grid().row_count(), 5);
    }
}
