//! Page Size
//!
//! Page sizes are restricted to the selector's options; anything else is
//! rejected rather than clamped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::error::{Error, Result};

/// A validated grid page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    /// Get the number of rows per page
    pub fn get(self) -> usize {
        self.0
    }

    /// All selectable page sizes, ascending
    pub fn options() -> impl Iterator<Item = PageSize> {
        PAGE_SIZE_OPTIONS.into_iter().map(PageSize)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(DEFAULT_PAGE_SIZE)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if PAGE_SIZE_OPTIONS.contains(&value) {
            Ok(PageSize(value))
        } else {
            Err(Error::InvalidPageSize {
                requested: value.to_string(),
            })
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let requested = s.trim();
        match requested.parse::<usize>() {
            Ok(value) => PageSize::try_from(value).map_err(|_| Error::InvalidPageSize {
                requested: requested.to_string(),
            }),
            Err(_) => Err(Error::InvalidPageSize {
                requested: requested.to_string(),
            }),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_listed_sizes() {
        for value in PAGE_SIZE_OPTIONS {
            let size: PageSize = value.to_string().parse().expect("listed size");
            assert_eq!(size.get(), value);
        }
        assert_eq!(PageSize::options().count(), 10);
    }

    #[test]
    fn test_rejects_unlisted_sizes() {
        for input in ["25", "0", "110", "-10", "ten", ""] {
            let result = input.parse::<PageSize>();
            assert!(
                matches!(result, Err(Error::InvalidPageSize { .. })),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_trims_whitespace() {
        let size: PageSize = " 50 ".parse().expect("trimmed");
        assert_eq!(size.get(), 50);
    }

    #[test]
    fn test_serde_validates() {
        let size: PageSize = serde_json::from_str("30").expect("valid");
        assert_eq!(size.get(), 30);
        assert!(serde_json::from_str::<PageSize>("35").is_err());
    }
}
