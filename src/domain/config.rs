//! Config - Application Configuration
//!
//! Read-only settings from `ticker-table.toml`. Every key is optional and a
//! missing file means defaults.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::constants::{REQUEST_TIMEOUT_SECS, TICKER_ENDPOINT};
use crate::error::Result;
use crate::grid::PageSize;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Ticker snapshot endpoint
    pub endpoint: String,
    /// Upper bound for the ticker request
    pub request_timeout: Duration,
    /// Page size shown on startup
    pub default_page_size: PageSize,
    /// Forced UI locale ("en", "zh"); system locale when unset
    pub locale: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: TICKER_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            default_page_size: PageSize::default(),
            locale: None,
        }
    }
}

/// On-disk shape, before validation
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
    default_page_size: Option<usize>,
    locale: Option<String>,
}

impl AppConfig {
    /// Parse TOML text; invalid values fall back to defaults with a warning
    pub fn from_toml(text: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text)?;
        let defaults = Self::default();

        let default_page_size = match raw.default_page_size.map(PageSize::try_from) {
            None => defaults.default_page_size,
            Some(Ok(size)) => size,
            Some(Err(e)) => {
                warn!(error = %e, "Ignoring default_page_size");
                defaults.default_page_size
            }
        };

        let request_timeout = match raw.request_timeout_secs {
            Some(0) => {
                warn!("Ignoring request_timeout_secs = 0");
                defaults.request_timeout
            }
            Some(secs) => Duration::from_secs(secs),
            None => defaults.request_timeout,
        };

        Ok(Self {
            endpoint: raw
                .endpoint
                .filter(|e| !e.trim().is_empty())
                .unwrap_or(defaults.endpoint),
            request_timeout,
            default_page_size,
            locale: raw.locale.filter(|l| !l.trim().is_empty()),
        })
    }

    /// Load from `path`, or defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }
        info!(path = ?path, "Loading config file");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}
