//! View State
//!
//! Presentation state of the grid. Every change is an explicit transition that
//! consumes the old state and returns the new one; row data is never touched.

use crate::grid::page_size::PageSize;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort on one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortModel<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortModel<F> {
    /// Next sort after a header click on `field`: none → ascending → descending → none
    pub fn cycle(current: Option<SortModel<F>>, field: F) -> Option<SortModel<F>> {
        match current {
            Some(sort) if sort.field == field => match sort.direction {
                SortDirection::Ascending => Some(SortModel {
                    field,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortModel {
                field,
                direction: SortDirection::Ascending,
            }),
        }
    }
}

/// Grid presentation state
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<F> {
    page_size: PageSize,
    page: usize,
    hidden: Vec<F>,
    quick_filter: String,
    column_filters: Vec<(F, String)>,
    sort: Option<SortModel<F>>,
}

impl<F> Default for ViewState<F> {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            page: 0,
            hidden: Vec::new(),
            quick_filter: String::new(),
            column_filters: Vec::new(),
            sort: None,
        }
    }
}

impl<F: Copy + PartialEq> ViewState<F> {
    // ==================== Getters ====================

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Zero-based page index
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn quick_filter(&self) -> &str {
        &self.quick_filter
    }

    pub fn sort(&self) -> Option<SortModel<F>> {
        self.sort
    }

    /// Active per-column filters
    pub fn column_filters(&self) -> &[(F, String)] {
        &self.column_filters
    }

    /// Filter text of one column, empty when unset
    pub fn column_filter(&self, field: F) -> &str {
        self.column_filters
            .iter()
            .find(|(f, _)| *f == field)
            .map_or("", |(_, text)| text.as_str())
    }

    pub fn is_visible(&self, field: F) -> bool {
        !self.hidden.contains(&field)
    }

    // ==================== Transitions ====================

    /// Change the page size; paging restarts at the first page
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self {
            page_size,
            page: 0,
            ..self
        }
    }

    /// Move to a page, clamped to `page_count`
    pub fn with_page(self, page: usize, page_count: usize) -> Self {
        Self {
            page: page.min(page_count.saturating_sub(1)),
            ..self
        }
    }

    /// Show or hide a set of columns
    pub fn with_columns_visible(mut self, fields: &[F], visible: bool) -> Self {
        for field in fields {
            if visible {
                self.hidden.retain(|hidden| hidden != field);
            } else if !self.hidden.contains(field) {
                self.hidden.push(*field);
            }
        }
        self
    }

    /// Replace the quick filter text; paging restarts at the first page
    pub fn with_quick_filter(self, text: impl Into<String>) -> Self {
        Self {
            quick_filter: text.into(),
            page: 0,
            ..self
        }
    }

    /// Set one column's filter; blank text removes it. Paging restarts.
    pub fn with_column_filter(mut self, field: F, text: &str) -> Self {
        self.column_filters.retain(|(f, _)| *f != field);
        if !text.trim().is_empty() {
            self.column_filters.push((field, text.to_string()));
        }
        Self { page: 0, ..self }
    }

    /// Replace the sort model
    pub fn with_sort(self, sort: Option<SortModel<F>>) -> Self {
        Self { sort, ..self }
    }
}

/// Visibility toggle for a fixed pair of columns
///
/// Starts with the columns shown. Each toggle yields the visibility to apply,
/// so two toggles return to the starting visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnToggle {
    hidden: bool,
}

impl ColumnToggle {
    /// Flip the toggle, returning the new state and the visibility to apply
    pub fn toggled(self) -> (Self, bool) {
        (Self { hidden: !self.hidden }, self.hidden)
    }

    /// Whether the toggled columns are currently hidden
    pub fn is_hidden(self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        let start = ColumnToggle::default();
        let (once, first_visible) = start.toggled();
        let (twice, second_visible) = once.toggled();
        assert!(!first_visible);
        assert!(second_visible);
        assert_eq!(twice, start);
    }

    #[test]
    fn test_columns_visibility() {
        let state = ViewState::<u8>::default().with_columns_visible(&[1, 2], false);
        assert!(!state.is_visible(1));
        assert!(!state.is_visible(2));
        assert!(state.is_visible(3));

        let state = state.with_columns_visible(&[1, 2], false);
        let state = state.with_columns_visible(&[1, 2], true);
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_page_size_resets_page() {
        let size = PageSize::try_from(50).expect("valid");
        let state = ViewState::<u8>::default().with_page(3, 10).with_page_size(size);
        assert_eq!(state.page(), 0);
        assert_eq!(state.page_size().get(), 50);
    }

    #[test]
    fn test_page_is_clamped() {
        let state = ViewState::<u8>::default().with_page(99, 4);
        assert_eq!(state.page(), 3);
        let state = state.with_page(5, 0);
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn test_column_filter_set_and_clear() {
        let state = ViewState::<u8>::default().with_page(2, 5).with_column_filter(1, "eth");
        assert_eq!(state.page(), 0);
        assert_eq!(state.column_filter(1), "eth");
        assert_eq!(state.column_filter(2), "");

        let state = state.with_column_filter(1, "btc");
        assert_eq!(state.column_filters().len(), 1);
        let state = state.with_column_filter(1, "  ");
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_sort_cycle() {
        let asc = SortModel::cycle(None, 1u8);
        assert_eq!(asc.map(|s| s.direction), Some(SortDirection::Ascending));
        let desc = SortModel::cycle(asc, 1);
        assert_eq!(desc.map(|s| s.direction), Some(SortDirection::Descending));
        assert_eq!(SortModel::cycle(desc, 1), None);
        let other = SortModel::cycle(desc, 2);
        assert_eq!(other.map(|s| s.field), Some(2));
    }
}
