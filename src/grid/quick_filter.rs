//! Quick Filter
//!
//! A single free-text filter across the visible columns. The text is split on
//! whitespace and every token must occur, case-insensitively, somewhere in the
//! row.

/// Parsed quick filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickFilter {
    tokens: Vec<String>,
}

impl QuickFilter {
    /// Parse filter text into lowercase tokens
    pub fn parse(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Whether the filter accepts every row
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check a row's text, given as its cell values
    pub fn matches<S: AsRef<str>>(&self, cells: impl IntoIterator<Item = S>) -> bool {
        if self.is_empty() {
            return true;
        }
        let haystack = cells
            .into_iter()
            .map(|cell| cell.as_ref().to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");
        self.tokens.iter().all(|token| haystack.contains(token.as_str()))
    }
}
