//! Grid Controller
//!
//! The narrow command surface the ticker table needs from a grid. The table
//! handlers only talk to this trait, so the grid behind it can be swapped.

use crate::grid::export::CsvDocument;
use crate::grid::page_size::PageSize;

/// Commands and queries the table issues against its grid
pub trait GridController {
    type Row;
    type Field;

    /// Replace all rows with a freshly loaded collection
    fn load_rows(&mut self, rows: Vec<Self::Row>);

    /// Show or hide columns; other columns are untouched
    fn set_columns_visible(&mut self, fields: &[Self::Field], visible: bool);

    /// Change rows per page
    fn set_page_size(&mut self, size: PageSize);

    /// Narrow the displayed rows to those matching `text`
    fn set_quick_filter(&mut self, text: &str);

    /// Snapshot the current view (filtered, sorted, all pages) for CSV export
    fn export_csv(&self) -> CsvDocument;

    /// Currently selected rows, in row store order
    fn selected_rows(&self) -> Vec<Self::Row>;
}
