//! Grid Model
//!
//! In-memory grid over an immutable row store. Keeps an index list of the
//! displayed rows (quick filter, then sort) and pages over it. Selection is
//! tracked by row store index, so it survives filtering and sorting.

use std::collections::BTreeSet;

use crate::grid::cell::{GridRow, compare_cells};
use crate::grid::column::ColumnDescriptor;
use crate::grid::controller::GridController;
use crate::grid::export::CsvDocument;
use crate::grid::page_size::PageSize;
use crate::grid::quick_filter::QuickFilter;
use crate::grid::row_store::{RowStore, SharedRows};
use crate::grid::view_state::{SortDirection, SortModel, ViewState};

/// Grid state and rows
pub struct GridModel<R: GridRow> {
    columns: &'static [ColumnDescriptor<R::Field>],
    rows: SharedRows<R>,
    view: ViewState<R::Field>,
    displayed: Vec<usize>,
    selected: BTreeSet<usize>,
}

impl<R: GridRow> GridModel<R> {
    /// Create an empty grid with a static column schema
    pub fn new(columns: &'static [ColumnDescriptor<R::Field>]) -> Self {
        Self {
            columns,
            rows: SharedRows::default(),
            view: ViewState::default(),
            displayed: Vec::new(),
            selected: BTreeSet::new(),
        }
    }

    /// Set the initial page size
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.set_page_size(size);
        self
    }

    // ==================== Getters ====================

    /// Visible columns in schema order
    pub fn visible_columns(&self) -> impl Iterator<Item = &'static ColumnDescriptor<R::Field>> + '_ {
        self.columns
            .iter()
            .filter(|column| self.view.is_visible(column.field))
    }

    pub fn is_column_visible(&self, field: R::Field) -> bool {
        self.view.is_visible(field)
    }

    pub fn view(&self) -> &ViewState<R::Field> {
        &self.view
    }

    /// Number of loaded rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows passing the quick filter
    pub fn displayed_count(&self) -> usize {
        self.displayed.len()
    }

    /// Number of pages; at least one, even when empty
    pub fn page_count(&self) -> usize {
        self.displayed
            .len()
            .div_ceil(self.view.page_size().get())
            .max(1)
    }

    /// Zero-based current page
    pub fn current_page(&self) -> usize {
        self.view.page()
    }

    /// Rows on the current page, with their row store index
    pub fn page_rows(&self) -> Vec<(usize, &R)> {
        let size = self.view.page_size().get();
        self.displayed
            .iter()
            .skip(self.view.page() * size)
            .take(size)
            .filter_map(|&index| self.rows.row(index).map(|row| (index, row)))
            .collect()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether every displayed row is selected (and there is at least one)
    pub fn all_displayed_selected(&self) -> bool {
        !self.displayed.is_empty() && self.displayed.iter().all(|i| self.selected.contains(i))
    }

    // ==================== Paging ====================

    pub fn go_to_page(&mut self, page: usize) {
        let page_count = self.page_count();
        self.update_view(|view| view.with_page(page, page_count));
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page().saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page().saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.go_to_page(0);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.page_count().saturating_sub(1));
    }

    // ==================== Sorting ====================

    /// Cycle the sort on a column: none → ascending → descending → none
    pub fn sort_by(&mut self, field: R::Field) {
        let sortable = self
            .columns
            .iter()
            .any(|column| column.field == field && column.sortable);
        if !sortable {
            return;
        }
        let next = SortModel::cycle(self.view.sort(), field);
        self.update_view(|view| view.with_sort(next));
        self.refresh();
    }

    // ==================== Column Filters ====================

    /// Filter one column; blank text clears it
    pub fn set_column_filter(&mut self, field: R::Field, text: &str) {
        if self.view.column_filter(field) == text.trim() {
            return;
        }
        self.update_view(|view| view.with_column_filter(field, text.trim()));
        self.refresh();
    }

    // ==================== Selection ====================

    /// Flip selection of one row; returns the new state
    pub fn toggle_selected(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        if self.selected.remove(&index) {
            false
        } else {
            self.selected.insert(index);
            true
        }
    }

    /// Select or deselect every displayed row
    pub fn set_displayed_selected(&mut self, selected: bool) {
        if selected {
            self.selected.extend(self.displayed.iter().copied());
        } else {
            for index in &self.displayed {
                self.selected.remove(index);
            }
        }
    }

    // ==================== Internals ====================

    fn update_view(&mut self, transition: impl FnOnce(ViewState<R::Field>) -> ViewState<R::Field>) {
        let view = std::mem::take(&mut self.view);
        self.view = transition(view);
    }

    /// Recompute the displayed index list and clamp the page
    fn refresh(&mut self) {
        let filter = QuickFilter::parse(self.view.quick_filter());
        let fields: Vec<R::Field> = self.visible_columns().map(|column| column.field).collect();
        let rows = self.rows.all();

        let column_filters: Vec<_> = self
            .view
            .column_filters()
            .iter()
            .filter_map(|(field, text)| {
                self.columns
                    .iter()
                    .find(|column| column.field == *field)
                    .map(|column| (column, text.as_str()))
            })
            .collect();

        let mut displayed: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                column_filters.iter().all(|(column, text)| column.accepts(*row, text))
                    && filter.matches(fields.iter().map(|&field| row.cell(field).raw()))
            })
            .map(|(index, _)| index)
            .collect();

        if let Some(sort) = self.view.sort() {
            displayed.sort_by(|&a, &b| {
                let ordering = compare_cells(&rows[a].cell(sort.field), &rows[b].cell(sort.field));
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        self.displayed = displayed;
        let (page, page_count) = (self.view.page(), self.page_count());
        self.update_view(|view| view.with_page(page, page_count));
    }
}

impl<R: GridRow> GridController for GridModel<R> {
    type Row = R;
    type Field = R::Field;

    fn load_rows(&mut self, rows: Vec<R>) {
        self.rows = SharedRows::new(rows);
        self.selected.clear();
        self.update_view(|view| view.with_page(0, 1));
        self.refresh();
    }

    fn set_columns_visible(&mut self, fields: &[R::Field], visible: bool) {
        self.update_view(|view| view.with_columns_visible(fields, visible));
        self.refresh();
    }

    fn set_page_size(&mut self, size: PageSize) {
        self.update_view(|view| view.with_page_size(size));
    }

    fn set_quick_filter(&mut self, text: &str) {
        if self.view.quick_filter() == text {
            return;
        }
        self.update_view(|view| view.with_quick_filter(text));
        self.refresh();
    }

    fn export_csv(&self) -> CsvDocument {
        let columns: Vec<_> = self.visible_columns().collect();
        let headers = columns.iter().map(|column| column.header.to_string()).collect();
        let records = self
            .displayed
            .iter()
            .filter_map(|&index| self.rows.row(index))
            .map(|row| columns.iter().map(|column| column.display(row)).collect())
            .collect();
        CsvDocument::new(headers, records)
    }

    fn selected_rows(&self) -> Vec<R> {
        let indices: Vec<usize> = self.selected.iter().copied().collect();
        self.rows.rows_at(&indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::cell::CellValue;
    use crate::grid::column::Formatter;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Field {
        Name,
        Price,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Quote {
        name: String,
        price: String,
    }

    impl GridRow for Quote {
        type Field = Field;

        fn cell(&self, field: Field) -> CellValue<'_> {
            match field {
                Field::Name => CellValue::Text(&self.name),
                Field::Price => CellValue::Text(&self.price),
            }
        }
    }

    static COLUMNS: [ColumnDescriptor<Field>; 2] = [
        ColumnDescriptor::new(Field::Name, "Name").checkbox_selection(),
        ColumnDescriptor::new(Field::Price, "Price").formatter(Formatter::Currency),
    ];

    fn quotes(count: usize) -> Vec<Quote> {
        (0..count)
            .map(|i| Quote {
                name: format!("SYM{i:03}"),
                price: format!("{}", count - i),
            })
            .collect()
    }

    fn grid(count: usize) -> GridModel<Quote> {
        let mut grid = GridModel::new(&COLUMNS);
        grid.load_rows(quotes(count));
        grid
    }

    #[test]
    fn test_load_shows_all_rows() {
        let grid = grid(37);
        assert_eq!(grid.row_count(), 37);
        assert_eq!(grid.displayed_count(), 37);
        assert_eq!(grid.page_count(), 4);
        assert_eq!(grid.page_rows().len(), 10);
    }

    #[test]
    fn test_page_size_bounds_page_rows() {
        let mut grid = grid(120);
        grid.set_page_size(PageSize::try_from(50).expect("valid"));
        assert_eq!(grid.page_rows().len(), 50);
        grid.last_page();
        assert_eq!(grid.current_page(), 2);
        assert_eq!(grid.page_rows().len(), 20);

        let mut small = self::grid(7);
        small.set_page_size(PageSize::try_from(50).expect("valid"));
        assert_eq!(small.page_rows().len(), 7);
    }

    #[test]
    fn test_paging_is_clamped() {
        let mut grid = grid(25);
        grid.previous_page();
        assert_eq!(grid.current_page(), 0);
        grid.next_page();
        grid.next_page();
        grid.next_page();
        assert_eq!(grid.current_page(), 2);
        assert_eq!(grid.page_rows().len(), 5);
    }

    #[test]
    fn test_quick_filter_narrows_and_resets_page() {
        let mut grid = grid(30);
        grid.next_page();
        grid.set_quick_filter("sym01");
        assert_eq!(grid.current_page(), 0);
        assert_eq!(grid.displayed_count(), 10);
        grid.set_quick_filter("");
        assert_eq!(grid.displayed_count(), 30);
    }

    #[test]
    fn test_quick_filter_ignores_hidden_columns() {
        let mut grid = grid(5);
        grid.set_quick_filter("SYM002");
        assert_eq!(grid.displayed_count(), 1);
        grid.set_columns_visible(&[Field::Name], false);
        assert_eq!(grid.displayed_count(), 0);
        grid.set_columns_visible(&[Field::Name], true);
        assert_eq!(grid.displayed_count(), 1);
    }

    #[test]
    fn test_column_filter_combines_with_quick_filter() {
        let mut grid = grid(30);
        grid.set_column_filter(Field::Name, "sym02");
        assert_eq!(grid.displayed_count(), 10);
        grid.set_quick_filter("SYM021");
        assert_eq!(grid.displayed_count(), 1);
        grid.set_column_filter(Field::Name, "");
        grid.set_quick_filter("");
        assert_eq!(grid.displayed_count(), 30);
    }

    #[test]
    fn test_sort_numeric_then_reverse() {
        let mut grid = grid(12);
        grid.sort_by(Field::Price);
        let first: Vec<_> = grid.page_rows().iter().map(|(_, q)| q.price.clone()).collect();
        assert_eq!(first[0], "1");
        assert_eq!(first[9], "10");

        grid.sort_by(Field::Price);
        let first = grid.page_rows()[0].1.price.clone();
        assert_eq!(first, "12");

        grid.sort_by(Field::Price);
        assert_eq!(grid.page_rows()[0].1.name, "SYM000");
    }

    #[test]
    fn test_export_reflects_view() {
        let mut grid = grid(3);
        grid.sort_by(Field::Price);
        let doc = grid.export_csv();
        assert_eq!(doc.headers(), ["Name", "Price"]);
        assert_eq!(doc.records()[0], vec!["SYM002".to_string(), "1 €".to_string()]);

        grid.set_columns_visible(&[Field::Name], false);
        assert_eq!(grid.export_csv().headers(), ["Price"]);

        grid.set_quick_filter("nothing-matches");
        let doc = grid.export_csv();
        assert!(doc.is_empty());
        assert_eq!(doc.headers(), ["Price"]);
    }

    #[test]
    fn test_export_spans_all_pages() {
        let grid = grid(25);
        assert_eq!(grid.export_csv().len(), 25);
    }

    #[test]
    fn test_selection_survives_filtering() {
        let mut grid = grid(5);
        assert!(grid.toggle_selected(1));
        assert!(grid.toggle_selected(3));
        assert!(!grid.toggle_selected(99));
        grid.set_quick_filter("SYM003");
        assert_eq!(grid.selected_count(), 2);
        assert!(grid.all_displayed_selected());

        let names: Vec<_> = grid.selected_rows().into_iter().map(|q| q.name).collect();
        assert_eq!(names, ["SYM001", "SYM003"]);

        assert!(!grid.toggle_selected(1));
        assert_eq!(grid.selected_count(), 1);
    }

    #[test]
    fn test_select_all_displayed() {
        let mut grid = grid(5);
        grid.set_quick_filter("SYM00");
        grid.set_displayed_selected(true);
        assert_eq!(grid.selected_count(), 5);
        grid.set_quick_filter("SYM004");
        grid.set_displayed_selected(false);
        assert_eq!(grid.selected_count(), 4);
        assert!(!grid.is_selected(4));
    }

    #[test]
    fn test_reload_clears_selection() {
        let mut grid = grid(5);
        grid.toggle_selected(0);
        grid.load_rows(quotes(2));
        assert_eq!(grid.selected_count(), 0);
        assert_eq!(grid.row_count(), 2);
    }
}
