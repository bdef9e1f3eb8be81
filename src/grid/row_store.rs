//! Row Store
//!
//! Immutable storage for the loaded rows. The grid only ever reads from it;
//! filtering, sorting and paging work on index lists into the store.

use std::sync::Arc;

/// Trait for providing rows to the grid
pub trait RowStore: Send + Sync + 'static {
    type Row: Clone + Send + Sync + 'static;

    /// Get the total number of rows
    fn len(&self) -> usize;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by index
    fn row(&self, index: usize) -> Option<&Self::Row>;

    /// Clone the rows at the given indices, skipping unknown ones
    fn rows_at(&self, indices: &[usize]) -> Vec<Self::Row> {
        indices
            .iter()
            .filter_map(|&index| self.row(index).cloned())
            .collect()
    }
}

/// Shared, read-only row snapshot
pub struct SharedRows<R> {
    rows: Arc<[R]>,
}

impl<R: Clone + Send + Sync + 'static> SharedRows<R> {
    /// Take ownership of loaded rows
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows: rows.into() }
    }

    /// Get all rows
    pub fn all(&self) -> &[R] {
        &self.rows
    }
}

impl<R> Clone for SharedRows<R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }
}

impl<R> Default for SharedRows<R> {
    fn default() -> Self {
        Self {
            rows: Arc::from(Vec::new()),
        }
    }
}

impl<R: Clone + Send + Sync + 'static> RowStore for SharedRows<R> {
    type Row = R;

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<&Self::Row> {
        self.rows.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_at_skips_unknown_indices() {
        let store = SharedRows::new(vec!["a", "b", "c"]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.rows_at(&[2, 7, 0]), vec!["c", "a"]);
    }

    #[test]
    fn test_default_is_empty() {
        let store = SharedRows::<u32>::default();
        assert!(store.is_empty());
        assert_eq!(store.row(0), None);
    }
}
