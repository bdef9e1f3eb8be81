//! Error types for Ticker Table
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Page size outside the selectable options
    #[snafu(display("Invalid page size {requested:?}: expected one of 10, 20, ..., 100"))]
    InvalidPageSize { requested: String },

    /// IO error (file operations, network, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// HTTP request error
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// CSV serialization error
    #[snafu(display("CSV error: {source}"))]
    Csv { source: csv_async::Error },

    /// A background task was aborted before it produced a result
    #[snafu(display("Cancelled: {message}"))]
    Cancelled { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

impl From<csv_async::Error> for Error {
    fn from(source: csv_async::Error) -> Self {
        Error::Csv { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
