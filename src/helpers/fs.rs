//! File System Utilities
//!
//! Platform directories for configuration, logs and CSV exports.

use crate::constants::CONFIG_FILE_NAME;
use crate::error::{Error, Result};
use directories::{ProjectDirs, UserDirs};
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "tickertable", "ticker-table").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Path of the optional config file; the file itself is never created
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/ticker-table/ticker-table.toml`
/// - **macOS**: `~/Library/Application Support/com.tickertable.ticker-table/ticker-table.toml`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\tickertable\ticker-table\config\ticker-table.toml`
pub fn config_file_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

/// Get the data directory, used for log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/ticker-table/`
/// - **macOS**: `~/Library/Application Support/com.tickertable.ticker-table/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\tickertable\ticker-table\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Directory CSV exports are written to
///
/// The user's download directory, or the data directory when there is none.
pub fn export_dir() -> Result<PathBuf> {
    if let Some(download) = UserDirs::new().and_then(|dirs| dirs.download_dir().map(PathBuf::from))
        && download.is_dir()
    {
        return Ok(download);
    }
    get_or_create_data_dir()
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
