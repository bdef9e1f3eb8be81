//! Cell Values
//!
//! Borrowed view of one raw cell, as handed to formatters, the quick filter
//! and the sort comparator.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// A raw cell value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    /// Text as transported (symbols and decimal strings)
    Text(&'a str),
    /// Integer fields (ids, counts, epoch milliseconds)
    Integer(i64),
}

impl<'a> CellValue<'a> {
    /// Raw textual form, as it would be concatenated for display
    pub fn raw(&self) -> Cow<'a, str> {
        match *self {
            CellValue::Text(text) => Cow::Borrowed(text),
            CellValue::Integer(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Numeric interpretation, if any
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            CellValue::Text(text) => text.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
            CellValue::Integer(n) => Some(n as f64),
        }
    }
}

/// Compare two cells for sorting
///
/// Numbers compare numerically and sort before non-numeric text, which is
/// compared case-insensitively.
pub fn compare_cells(a: &CellValue<'_>, b: &CellValue<'_>) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => {
            let (x, y) = (a.raw(), b.raw());
            x.to_lowercase()
                .cmp(&y.to_lowercase())
                .then_with(|| x.cmp(&y))
        }
    }
}

/// A record the grid can display
pub trait GridRow: Clone + Send + Sync + 'static {
    /// Column key type
    type Field: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Read the raw value of one field
    fn cell(&self, field: Self::Field) -> CellValue<'_>;
}
