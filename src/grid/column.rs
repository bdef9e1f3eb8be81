//! Column Definition
//!
//! Static column descriptors: which field a column shows, its header label,
//! how cells are formatted and filtered, and selection checkbox behavior.

use crate::constants::DEFAULT_COLUMN_WIDTH;
use crate::grid::cell::{CellValue, GridRow};
use crate::helpers::{
    format_currency, format_epoch_millis, format_epoch_millis_text, format_percentage,
    format_units,
};

/// Cell value formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// `"{value} €"`
    Currency,
    /// `"{value} %"`
    Percentage,
    /// `"{value} units"`
    Units,
    /// Long en-GB date-time from epoch milliseconds
    Time,
}

impl Formatter {
    /// Format a raw cell
    pub fn apply(self, value: &CellValue<'_>) -> String {
        match (self, value) {
            (Formatter::Time, CellValue::Integer(millis)) => format_epoch_millis(*millis),
            (Formatter::Time, CellValue::Text(text)) => format_epoch_millis_text(text),
            (Formatter::Currency, value) => format_currency(&value.raw()),
            (Formatter::Percentage, value) => format_percentage(&value.raw()),
            (Formatter::Units, value) => format_units(&value.raw()),
        }
    }
}

/// Column filter kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterKind {
    #[default]
    Text,
    Number,
    Date,
}

/// Column descriptor for the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDescriptor<F> {
    /// Field this column displays
    pub field: F,
    /// Header label
    pub header: &'static str,
    /// Optional cell formatter
    pub formatter: Option<Formatter>,
    /// Filter kind
    pub filter: FilterKind,
    /// Row selection checkbox in each cell, and select-all in the header
    pub checkbox_selection: bool,
    /// Whether clicking the header sorts
    pub sortable: bool,
    /// Width hint in pixels
    pub width: f32,
}

impl<F: Copy> ColumnDescriptor<F> {
    /// Create a plain sortable text column
    pub const fn new(field: F, header: &'static str) -> Self {
        Self {
            field,
            header,
            formatter: None,
            filter: FilterKind::Text,
            checkbox_selection: false,
            sortable: true,
            width: DEFAULT_COLUMN_WIDTH,
        }
    }

    /// Set the formatter
    pub const fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Set the filter kind
    pub const fn filter(mut self, filter: FilterKind) -> Self {
        self.filter = filter;
        self
    }

    /// Enable row selection checkboxes
    pub const fn checkbox_selection(mut self) -> Self {
        self.checkbox_selection = true;
        self
    }

    /// Display string for this column's cell in `row`
    pub fn display<R: GridRow<Field = F>>(&self, row: &R) -> String {
        let value = row.cell(self.field);
        match self.formatter {
            Some(formatter) => formatter.apply(&value),
            None => value.raw().into_owned(),
        }
    }

    /// Whether a row passes this column's filter
    ///
    /// Text filters match a case-insensitive substring of the raw value.
    /// Number filters compare numerically when the text parses, date filters
    /// match against the formatted value.
    pub fn accepts<R: GridRow<Field = F>>(&self, row: &R, text: &str) -> bool {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let cell = row.cell(self.field);
        match self.filter {
            FilterKind::Number => match needle.parse::<f64>() {
                Ok(wanted) => cell.as_f64() == Some(wanted),
                Err(_) => cell.raw().to_lowercase().contains(&needle),
            },
            FilterKind::Date => self.display(row).to_lowercase().contains(&needle),
            FilterKind::Text => cell.raw().to_lowercase().contains(&needle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_dispatch() {
        assert_eq!(Formatter::Currency.apply(&CellValue::Text("1.5")), "1.5 €");
        assert_eq!(Formatter::Percentage.apply(&CellValue::Integer(3)), "3 %");
        assert_eq!(Formatter::Units.apply(&CellValue::Text("")), " units");
        assert_eq!(
            Formatter::Time.apply(&CellValue::Integer(0)),
            "Thursday 1 January 1970 at 00:00:00"
        );
    }

    #[test]
    fn test_builder_defaults() {
        let column = ColumnDescriptor::new(0u8, "Zero").formatter(Formatter::Units);
        assert!(column.sortable);
        assert!(!column.checkbox_selection);
        assert_eq!(column.filter, FilterKind::Text);
        assert_eq!(column.formatter, Some(Formatter::Units));
    }

    #[derive(Clone)]
    struct Sample(i64, &'static str);

    impl GridRow for Sample {
        type Field = u8;

        fn cell(&self, field: u8) -> CellValue<'_> {
            match field {
                0 => CellValue::Integer(self.0),
                _ => CellValue::Text(self.1),
            }
        }
    }

    #[test]
    fn test_column_filters() {
        let row = Sample(1_700_000_000_000, "ETHBTC");
        let text = ColumnDescriptor::new(1u8, "Symbol");
        assert!(text.accepts(&row, "ethb"));
        assert!(!text.accepts(&row, "bnb"));
        assert!(text.accepts(&row, " "));

        let number = ColumnDescriptor::new(0u8, "Count").filter(FilterKind::Number);
        assert!(number.accepts(&row, "1700000000000"));
        assert!(!number.accepts(&row, "17"));

        let date = ColumnDescriptor::new(0u8, "Open Time")
            .formatter(Formatter::Time)
            .filter(FilterKind::Date);
        assert!(date.accepts(&row, "november 2023"));
        assert!(!date.accepts(&row, "1970"));
    }
}
